use std::fs;

use meh::run;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

enum Expectation {
    Output(String),
    Error(String),
}

fn expectation(source: &str) -> Option<Expectation> {
    let header = source.lines().next()?;
    if let Some(output) = header.strip_prefix("# expect: ") {
        return Some(Expectation::Output(output.trim_end().to_string()));
    }
    header.strip_prefix("# expect-error: ")
          .map(|error| Expectation::Error(error.trim_end().to_string()))
}

#[test]
fn program_corpus() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").sort_by_file_name()
                                      .into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "meh"))
    {
        let path = entry.path();
        let name = path.display().to_string();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expectation(&source).unwrap_or_else(|| panic!("{name} has no expect header"));

        count += 1;
        match (expected, run(&name, source.as_bytes())) {
            (Expectation::Output(output), Ok(result)) => {
                assert_eq!(result.program_output().to_string(), output, "{name}");
            },
            (Expectation::Output(_), Err(e)) => panic!("{name} failed: {e}"),
            (Expectation::Error(error), Err(e)) => {
                let message = e.to_string();
                assert!(message.contains(&error), "{name}: '{message}' lacks '{error}'");
            },
            (Expectation::Error(_), Ok(result)) => {
                panic!("{name} succeeded with {} but was expected to fail", result.program_output());
            },
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}
