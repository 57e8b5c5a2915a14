use std::fs;

use ratus::{FunctionTable, Evaluator, Value, native_fn};
use walkdir::WalkDir;

/// One line of a case file: `source => expected` or `source => error: fragment`.
enum Expectation<'a> {
    Value(&'a str),
    Error(&'a str),
}

fn parse_case(line: &str) -> Option<(&str, Expectation<'_>)> {
    let (source, expected) = line.split_once("=>")?;
    let expected = expected.trim();

    let expectation = match expected.strip_prefix("error:") {
        Some(fragment) => Expectation::Error(fragment.trim()),
        None => Expectation::Value(expected),
    };
    Some((source.trim(), expectation))
}

fn case_evaluator() -> Evaluator {
    let mut functions = FunctionTable::new();
    functions.insert("lookup".to_string(), native_fn(|_| Ok(Value::Integer(10))));
    functions.insert("rating".to_string(), native_fn(|_| Ok(Value::from("PG"))));
    Evaluator::with_functions(functions)
}

#[test]
fn case_files_pass() {
    let evaluator = case_evaluator();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "ratus"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((source, expectation)) = parse_case(line) else {
                panic!("Malformed case at {path:?}:{}: {line}", i + 1);
            };
            count += 1;

            match (evaluator.evaluate(source), expectation) {
                (Ok(value), Expectation::Value(expected)) => {
                    assert_eq!(value.to_string(),
                               expected,
                               "Case at {path:?}:{} evaluated {source:?}",
                               i + 1);
                },
                (Err(e), Expectation::Error(fragment)) => {
                    assert!(e.to_string().contains(fragment),
                            "Case at {path:?}:{} failed with {e:?}, expected {fragment:?}",
                            i + 1);
                },
                (Ok(value), Expectation::Error(fragment)) => {
                    panic!("Case at {path:?}:{} returned {value} but was expected to fail with {fragment:?}",
                           i + 1);
                },
                (Err(e), Expectation::Value(expected)) => {
                    panic!("Case at {path:?}:{} failed with {e} but was expected to return {expected}",
                           i + 1);
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}
