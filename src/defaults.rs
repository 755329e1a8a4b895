use crate::RuleSpec;

/// HTTP verbs accepted by the default `method` rule.
const METHODS: [&str; 9] = [
    "GET", "HEAD", "POST", "PUT", "DELETE", "CONNECT", "OPTIONS", "TRACE", "PATCH",
];

/// Status codes the default `isError` rule maps to `"true"`.
const ERROR_STATUS: [&str; 11] = [
    "400", "401", "403", "404", "405", "422", "500", "501", "502", "503", "504",
];

/// Status codes the default `isError` rule maps to `"false"`.
const OK_STATUS: [&str; 11] = [
    "200", "201", "202", "204", "206", "300", "301", "302", "303", "304", "307",
];

/// The relabeling rules that are always present, with or without user
/// configuration: `method`, `addr` and `type` from the request line,
/// `status` copied verbatim, and the `isError` classification of the
/// status code.
///
/// `isError` is an explicit enumeration, not a numeric-range test. Status
/// codes outside both lists, valid 4xx/5xx/2xx/3xx included, receive no
/// `isError` label.
#[must_use]
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new("method", "request")
            .split(1)
            .allow(METHODS.iter().map(|m| (*m, *m))),
        RuleSpec::new("status", "status"),
        RuleSpec::new("addr", "request").split(2),
        RuleSpec::new("type", "request").split(3),
        RuleSpec::new("isError", "status").allow(
            ERROR_STATUS
                .iter()
                .map(|s| (*s, "true"))
                .chain(OK_STATUS.iter().map(|s| (*s, "false"))),
        ),
    ]
}
