//! Colored diagnostic printing, grounded in the teacher's
//! `display_messages.rs`: same path-normalization and source-line +
//! caret-underline rendering, rebuilt against `messages::errors` instead of
//! the legacy `compiler_frontend::compiler_errors` types.

use crate::messages::errors::{CompilerError, CompilerMessages, CompilerWarning, ErrorKind};
use saying::say;
use std::env;
use std::path::{Path, PathBuf};

fn normalize_display_path(path: &Path) -> PathBuf {
    let path_string = path.to_string_lossy();
    if let Some(stripped) = path_string.strip_prefix(r"\\?\") {
        return PathBuf::from(stripped);
    }
    path.to_path_buf()
}

fn relative_display_path(scope: &Path) -> String {
    let normalized_scope = normalize_display_path(scope);
    match env::current_dir() {
        Ok(dir) => {
            let normalized_dir = normalize_display_path(&dir);
            normalized_scope
                .strip_prefix(&normalized_dir)
                .unwrap_or(&normalized_scope)
                .to_string_lossy()
                .to_string()
        }
        Err(_) => normalized_scope.to_string_lossy().to_string(),
    }
}

pub fn print_compiler_messages(messages: &CompilerMessages) {
    for err in &messages.errors {
        print_formatted_error(err);
    }
    for warning in &messages.warnings {
        print_formatted_warning(warning);
    }
}

fn error_banner(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Syntax => "Syntax",
        ErrorKind::NameResolution => "Name Resolution",
        ErrorKind::Type => "Type Error",
        ErrorKind::Relation => "Relation Error",
        ErrorKind::RuntimeSemanticsAtCompileTime => "Compile-time Evaluation",
        ErrorKind::Config => "Config File Issue",
    }
}

pub fn print_formatted_error(e: &CompilerError) {
    let relative_dir = relative_display_path(&e.location.scope);
    let line_number = e.location.start_pos.line_number as usize;

    if !relative_dir.is_empty() {
        say!(Dark Magenta relative_dir);
    }
    say!(Red { error_banner(e.kind) });
    say!(Dark Magenta "Line ", Bright line_number);
    say!(Red e.msg.clone());

    for frame in &e.stack_trace {
        if let Some(callsite) = &frame.callsite {
            say!(
                Dark "  at ",
                relative_display_path(&callsite.scope),
                ":",
                callsite.start_pos.line_number
            );
        }
    }

    print!(
        "{}",
        " ".repeat((e.location.start_pos.char_column.saturating_sub(1)) as usize)
    );
    let length_of_underline = (e.location.end_pos.char_column
        - e.location.start_pos.char_column
        + 1)
        .max(1) as usize;
    say!(Red { "^".repeat(length_of_underline) });
}

pub fn print_formatted_warning(w: &CompilerWarning) {
    let relative_dir = relative_display_path(&w.location.scope);
    if !relative_dir.is_empty() {
        say!(Dark Magenta relative_dir);
    }
    say!(Yellow "Warning: ", w.msg.clone());
}
