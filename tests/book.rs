use std::{fs, path::Path};

use relset::session::{core::Session, registry::Registry};
use walkdir::WalkDir;

/// A `relset` code block from the book.
///
/// A line `// => text` states what the command above it reports. Blocks
/// fenced as `relset,should_fail` must stop with an error.
struct Example {
    code:        String,
    should_fail: bool,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in WalkDir::new("book/src").into_iter()
                                         .filter_map(Result::ok)
                                         .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in examples(&content).iter().enumerate() {
            count += 1;
            if example.should_fail {
                check_failure(path, i + 1, &example.code);
            } else {
                check_outcomes(path, i + 1, &example.code);
            }
        }
    }

    assert!(count > 0, "No relset examples found in book/src");
}

#[test]
fn expectations_are_compared() {
    let example = &examples("```relset\nX = 1, 2\n// => X = {1, 2}\n```\n")[0];
    check_outcomes(Path::new("inline"), 1, &example.code);

    let wrong = &examples("```relset\nX = 1, 2\n// => X = {1}\n```\n")[0];
    let result = std::panic::catch_unwind(|| check_outcomes(Path::new("inline"), 1, &wrong.code));
    assert!(result.is_err());
}

#[test]
fn failing_blocks_are_recognized() {
    let blocks = examples("```relset,should_fail\ndel U\n```\n\n```text\nnot a script\n```\n");

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].should_fail);
    check_failure(Path::new("inline"), 1, &blocks[0].code);
}

/// Runs a block line by line and checks every `// =>` line against the
/// outcome of the command above it.
fn check_outcomes(path: &Path, index: usize, code: &str) {
    let mut session = Session::new(Registry::with_presets());
    let mut last: Option<String> = None;

    for (i, line) in code.lines().enumerate() {
        if let Some(expected) = line.trim().strip_prefix("// =>") {
            assert_eq!(last.as_deref(),
                       Some(expected.trim()),
                       "Example {index} in {path:?}, line {}",
                       i + 1);
            continue;
        }

        match session.execute_line(line, i + 1) {
            Ok(Some(outcome)) => last = Some(outcome.to_string()),
            Ok(None) => {},
            Err(e) => panic!("Example {index} in {path:?} failed:\n{code}\nError: {e}"),
        }
    }
}

fn check_failure(path: &Path, index: usize, code: &str) {
    let mut session = Session::new(Registry::with_presets());

    assert!(session.run(code).is_err(),
            "Example {index} in {path:?} was expected to fail:\n{code}");
}

fn examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut current: Option<Example> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        match current.take() {
            None => {
                if let Some(info) = trimmed.strip_prefix("```relset") {
                    current = Some(Example { code:        String::new(),
                                             should_fail: info.trim() == ",should_fail", });
                }
            },
            Some(example) if trimmed.starts_with("```") => examples.push(example),
            Some(mut example) => {
                example.code.push_str(line);
                example.code.push('\n');
                current = Some(example);
            },
        }
    }

    examples
}
