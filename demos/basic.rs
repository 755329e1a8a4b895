use relabel::{LogRecord, RuleSetBuilder, RuleSpec};

fn main() {
    // Default rules plus one user rule reading the Host header field
    let ruleset = RuleSetBuilder::new()
        .rule(RuleSpec::new("vhost", "host"))
        .compile()
        .expect("failed to compile ruleset");

    println!("{ruleset}");

    // One parsed access-log entry, as the upstream parser would hand it over
    let record = LogRecord::new()
        .set("request", "GET /index.html HTTP/1.1")
        .set("status", "404")
        .set("host", "example.com");

    let evaluation = ruleset.evaluate_detailed(&record);
    println!("Labels: {}", evaluation.labels());
    for miss in evaluation.misses() {
        println!("Miss: {miss}");
    }
}
