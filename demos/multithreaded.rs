use std::sync::Arc;
use std::thread;

use relabel::{LogRecord, RuleSet};

fn main() {
    let ruleset = Arc::new(RuleSet::default());

    let entries = [
        ("GET /index.html HTTP/1.1", "200"),
        ("POST /api/v1/data HTTP/1.1", "502"),
        ("BREW /teapot HTTP/1.1", "418"),
        ("DELETE /thing", "204"),
    ];

    let handles: Vec<_> = entries
        .into_iter()
        .enumerate()
        .map(|(i, (request, status))| {
            let rs = Arc::clone(&ruleset);
            thread::spawn(move || {
                let record = LogRecord::new().set("request", request).set("status", status);
                let labels = rs.evaluate(&record);
                println!("Thread {i}: {labels}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
