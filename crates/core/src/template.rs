// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional `{}` template rendering with bounded output.
//!
//! This is the one capability the logger needs from a text collaborator:
//! substitute placeholders left-to-right with displayable values. Trimming,
//! search, and splitting are already native `str` operations.

use std::fmt::{self, Write};

/// Staging cap for formatted log calls. Output beyond this many bytes is
/// silently truncated; callers must not rely on unbounded single-line
/// length.
pub const MAX_RENDERED_BYTES: usize = 1024;

/// Substitute `{}` placeholders in `template` left-to-right with `args`.
///
/// Arguments beyond the available placeholders are ignored; placeholders
/// beyond the available arguments are left verbatim. Neither case is an
/// error.
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 16);
    let mut rest = template;
    for arg in args {
        match rest.find("{}") {
            Some(pos) => {
                out.push_str(&rest[..pos]);
                let _ = write!(out, "{}", arg);
                rest = &rest[pos + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// [`render`], truncated to at most `cap` bytes on a char boundary.
pub fn render_bounded(template: &str, args: &[&dyn fmt::Display], cap: usize) -> String {
    let mut out = render(template, args);
    if out.len() > cap {
        let mut end = cap;
        while end > 0 && !out.is_char_boundary(end) {
            end -= 1;
        }
        out.truncate(end);
    }
    out
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
