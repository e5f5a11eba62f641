// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Help template that places the grouped command list before the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_issues}
  {create}      Create GitHub issues from phase files
  {list}        List issues parsed from phase files
  {show}        Show the issue that would be created for a ref

{header_setup}
  {init}        Write a default ghseed.toml
  {completion}  Generate shell completions",
        header_issues = colors::header("Issues:"),
        header_setup = colors::header("Setup:"),
        create = colors::literal("create"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  ghseed init                 Write ghseed.toml
  ghseed list                 Check what the phase files contain
  ghseed create --dry-run     Preview issues, labels and milestones
  ghseed create               Create the issues with gh",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
