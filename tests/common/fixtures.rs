//! Static checker-output corpora used across harnesses.

/// A realistic mypy run: error lines interleaved with notes and a summary.
/// Five of these lines are error lines.
pub const CORPUS_MYPY_OUTPUT: &[&str] = &[
    r#"src/app.py:42: error: Incompatible return value type (got "int", expected "str")  [return-value]"#,
    r#"src/app.py:57: note: See https://mypy.rtfd.io/en/stable/_refs.html#code-return-value for more info"#,
    r#"src/models/user.py:13: error: Name "Optional" is not defined  [name-defined]"#,
    r#"src/models/user.py:13: note: Did you forget to import it from "typing"?"#,
    r#"src/models/user.py:88: error: Item "None" of "Optional[User]" has no attribute "id"  [union-attr]"#,
    r#"tests/test_api.py:7: error: Module "api" has no attribute "client"  [attr-defined]"#,
    r#"scripts/migrate.py:120: error: Argument 1 to "run" has incompatible type "str"; expected "int"  [arg-type]"#,
    "Found 5 errors in 4 files (checked 31 source files)",
];

/// Lines that must never parse.
pub const CORPUS_NOT_ERRORS: &[&str] = &[
    "",
    "Success: no issues found in 10 source files",
    "Found 3 errors in 2 files (checked 10 source files)",
    "src/app.py:3: note: Revealed type is \"builtins.int\"",
    // one space before the category
    "src/app.py:3: error: Bad thing [misc]",
    // digit and underscore in the category
    "src/app.py:3: error: Bad thing  [misc2]",
    "src/app.py:3: error: Bad thing  [attr_defined]",
    // uppercase severity
    "src/app.py:3: ERROR: Bad thing  [misc]",
    // not a python file
    "src/app.pyi:3: error: Bad thing  [misc]",
    // missing line number
    "src/app.py: error: Bad thing  [misc]",
    // negative line number
    "src/app.py:-3: error: Bad thing  [misc]",
    // empty message
    "src/app.py:3: error:   [misc]",
    // text after the category
    "src/app.py:3: error: Bad thing  [misc] ",
];
