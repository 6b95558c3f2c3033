//! Integration tests for the inkline public surface.
//!
//! Everything runs against `MemoryConsole`, so the assertions can see both
//! the character stream and the exact order of color mutations.

use inkline::{
    Color, ColorChoice, Console, ConsoleEvent, FluentConsole, InklineError, MemoryConsole,
    StreamKind, Template, Value, template,
};

fn set_fg(color: Color) -> ConsoleEvent {
    ConsoleEvent::SetForeground(color)
}

fn set_bg(color: Color) -> ConsoleEvent {
    ConsoleEvent::SetBackground(color)
}

fn out(text: &str) -> ConsoleEvent {
    ConsoleEvent::Write {
        stream: StreamKind::Stdout,
        text: text.into(),
    }
}

// ── escaping and ordering ─────────────────────────────────────────────────────

#[test]
fn escaped_braces_round_trip() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{{literal}}")).unwrap();
    assert_eq!(console.output(), "{literal}");
}

#[test]
fn raw_messages_skip_scanning_entirely() {
    let console = MemoryConsole::new();
    // A raw `&str` would be a syntax error as a template; verbatim it is fine.
    inkline::write(&console, "{not {a} template").unwrap();
    assert_eq!(console.output(), "{not {a} template");
}

#[test]
fn same_argument_renders_twice() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{0}-{0}", "a")).unwrap();
    assert_eq!(console.output(), "a-a");
}

#[test]
fn placeholders_apply_in_pattern_order_not_declaration_order() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{1}{0}", "A", "B")).unwrap();
    assert_eq!(console.output(), "BA");
}

#[test]
fn color_changes_land_between_the_right_writes() {
    let console = MemoryConsole::new();
    inkline::write(
        &console,
        template!("plain {0}red{1} plain", Color::Red, Value::RestoreColor),
    )
    .unwrap();
    assert_eq!(
        console.events(),
        vec![
            out("plain "),
            set_fg(Color::Red),
            out("red"),
            set_fg(Color::DEFAULT_FOREGROUND),
            out(" plain"),
        ]
    );
}

// ── history semantics ─────────────────────────────────────────────────────────

#[test]
fn nested_foreground_restores_unwind_to_the_original() {
    let console = MemoryConsole::new();
    inkline::write(
        &console,
        template!(
            "{0}a{1}b{2}c{2}",
            Color::Red,
            Color::Blue,
            Value::RestoreColor,
        ),
    )
    .unwrap();
    // Red, Blue, back to Red, back to the pre-template foreground.
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
    assert_eq!(
        console.events(),
        vec![
            set_fg(Color::Red),
            out("a"),
            set_fg(Color::Blue),
            out("b"),
            set_fg(Color::Red),
            out("c"),
            set_fg(Color::DEFAULT_FOREGROUND),
        ]
    );
}

#[test]
fn background_and_foreground_stacks_are_independent() {
    let console = MemoryConsole::new();
    inkline::write(
        &console,
        template!(
            "{0}{1:bg}{2}{3}",
            Color::Red,
            Color::White,
            Value::RestoreBackground,
            Value::RestoreColor,
        ),
    )
    .unwrap();
    assert_eq!(
        console.events(),
        vec![
            set_fg(Color::Red),
            set_bg(Color::White),
            set_bg(Color::DEFAULT_BACKGROUND),
            set_fg(Color::DEFAULT_FOREGROUND),
        ]
    );
}

#[test]
fn restore_with_no_prior_set_is_a_silent_no_op() {
    let console = MemoryConsole::new();
    inkline::write(
        &console,
        template!("{0}{1}still here", Value::RestoreColor, Value::RestoreBackground),
    )
    .unwrap();
    assert_eq!(console.events(), vec![out("still here")]);
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
}

#[test]
fn background_tag_never_touches_the_foreground() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{0:bg}x", Color::Red)).unwrap();
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
    assert_eq!(console.background(), Color::Red);
}

// ── one-shot facade semantics ─────────────────────────────────────────────────

#[test]
fn plain_write_does_not_auto_restore() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{0}colored tail", Color::Magenta)).unwrap();
    // No wrapping scope: the inline set persists past the call.
    assert_eq!(console.foreground(), Color::Magenta);
}

#[test]
fn colored_write_restores_both_channels_after_the_call() {
    let console = MemoryConsole::new();
    console.set_foreground(Color::Green).unwrap();
    console.set_background(Color::DarkBlue).unwrap();

    inkline::write_colored(&console, Color::Red, Some(Color::White), "alert").unwrap();

    assert_eq!(console.output(), "alert");
    assert_eq!(console.foreground(), Color::Green);
    assert_eq!(console.background(), Color::DarkBlue);
}

#[test]
fn colored_write_restores_even_when_the_template_fails() {
    let console = MemoryConsole::new();
    let result = inkline::write_colored(
        &console,
        Color::Red,
        None,
        Template::new("{3}", vec![Value::from("only one")]),
    );
    assert!(result.is_err());
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
}

#[test]
fn line_variants_append_exactly_one_newline() {
    let console = MemoryConsole::new();
    inkline::write_line(&console, "hello").unwrap();
    inkline::ewrite_line(&console, "oops").unwrap();
    assert_eq!(console.output(), "hello\n");
    assert_eq!(console.error_output(), "oops\n");
}

#[test]
fn ewrite_targets_stderr_only() {
    let console = MemoryConsole::new();
    inkline::ewrite(&console, template!("{0}fail", Color::Red)).unwrap();
    assert_eq!(console.output(), "");
    assert_eq!(console.error_output(), "fail");
}

#[test]
fn scope_handles_restore_on_release_and_on_drop() {
    let console = MemoryConsole::new();

    let scope = inkline::with_colors(&console, Color::Yellow, Color::DarkRed).unwrap();
    assert_eq!(console.foreground(), Color::Yellow);
    assert_eq!(console.background(), Color::DarkRed);
    scope.release().unwrap();
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
    assert_eq!(console.background(), Color::DEFAULT_BACKGROUND);

    {
        let _scope = inkline::with_background_color(&console, Color::White).unwrap();
        assert_eq!(console.background(), Color::White);
    }
    assert_eq!(console.background(), Color::DEFAULT_BACKGROUND);
}

#[test]
fn scope_symmetry_survives_arbitrary_inner_churn() {
    let console = MemoryConsole::new();
    console.set_foreground(Color::Cyan).unwrap();
    console.set_background(Color::DarkGreen).unwrap();

    let scope = inkline::with_color(&console, Color::Red).unwrap();
    inkline::write(
        &console,
        template!(
            "{0}{1:bg}{2}{3}{4}",
            Color::Yellow,
            Color::Blue,
            Value::RestoreColor,
            Value::RestoreColor,
            Value::RestoreBackground,
        ),
    )
    .unwrap();
    scope.release().unwrap();

    assert_eq!(console.foreground(), Color::Cyan);
    assert_eq!(console.background(), Color::DarkGreen);
}

#[test]
fn read_line_passes_through_scripted_input() {
    let console = MemoryConsole::new();
    console.push_input("y");
    assert_eq!(inkline::read_line(&console).unwrap(), "y");
}

// ── error surface ─────────────────────────────────────────────────────────────

#[test]
fn malformed_template_fails_with_no_output_at_all() {
    let console = MemoryConsole::new();
    let result = inkline::write(&console, Template::new("text {0", vec![Value::from(1)]));
    assert!(matches!(result, Err(InklineError::Template(_))));
    assert_eq!(console.output(), "");
    assert!(console.events().is_empty());
}

#[test]
fn out_of_range_index_keeps_earlier_output_and_mutates_nothing_for_it() {
    let console = MemoryConsole::new();
    let result = inkline::write(&console, Template::new("{5}", vec![Value::from("a")]));
    assert!(matches!(result, Err(InklineError::Render(_))));
    assert!(console.events().is_empty());

    console.clear();
    let result = inkline::write(
        &console,
        Template::new("head {5}", vec![Value::Color(Color::Red)]),
    );
    assert!(result.is_err());
    // The literal before the bad placeholder already streamed out; the
    // placeholder itself changed nothing.
    assert_eq!(console.events(), vec![out("head ")]);
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
}

// ── format tags ───────────────────────────────────────────────────────────────

#[test]
fn printable_format_tags_render_invariantly() {
    let console = MemoryConsole::new();
    inkline::write(
        &console,
        template!("{0:X}/{1:04}/{2:.2}/{3}", 255, 7, 2.5, true),
    )
    .unwrap();
    assert_eq!(console.output(), "FF/0007/2.50/true");
}

#[test]
fn unknown_format_tag_on_a_color_still_means_foreground() {
    let console = MemoryConsole::new();
    inkline::write(&console, template!("{0:Background}", Color::Blue)).unwrap();
    // Tag match is exact and case-sensitive; anything else is foreground.
    assert_eq!(console.events(), vec![set_fg(Color::Blue)]);
}

// ── fluent session ────────────────────────────────────────────────────────────

#[test]
fn fluent_chain_persists_colors_across_calls() {
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent
        .set_color(Color::Yellow)
        .unwrap()
        .write("warning: ")
        .unwrap()
        .write("still yellow")
        .unwrap();
    assert_eq!(fluent.console().foreground(), Color::Yellow);

    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
    assert_eq!(fluent.console().output(), "warning: still yellow");
}

#[test]
fn fluent_history_spans_calls_in_lifo_order() {
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent.set_color(Color::Red).unwrap();
    fluent.set_color(Color::Blue).unwrap();
    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::Red);
    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
    // Third restore: empty history, defined no-op.
    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
}

#[test]
fn fluent_background_sugar_routes_through_the_bg_channel() {
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent.set_background_color(Color::DarkCyan).unwrap();
    assert_eq!(fluent.console().background(), Color::DarkCyan);
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
    fluent.restore_previous_background_color().unwrap();
    assert_eq!(fluent.console().background(), Color::DEFAULT_BACKGROUND);
}

#[test]
fn fluent_inline_set_is_visible_to_later_sugar_restore() {
    // Inline directives and sugar share one history because they share one
    // renderer.
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent
        .write(template!("{0}inline", Color::Green))
        .unwrap()
        .restore_previous_color()
        .unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
}

#[test]
fn fluent_colored_one_off_restores_and_skips_session_history() {
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent.set_color(Color::Yellow).unwrap();
    fluent
        .write_colored(Color::Red, Some(Color::White), "alert")
        .unwrap();
    // Back to the session's yellow, not the default.
    assert_eq!(fluent.console().foreground(), Color::Yellow);
    assert_eq!(fluent.console().background(), Color::DEFAULT_BACKGROUND);
    // The session history still holds exactly the yellow push.
    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
    fluent.restore_previous_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
}

#[test]
fn fluent_reset_color_defers_to_the_port() {
    let mut fluent = FluentConsole::new(MemoryConsole::new());
    fluent.set_color(Color::Red).unwrap();
    fluent.set_background_color(Color::White).unwrap();
    fluent.reset_color().unwrap();
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
    assert_eq!(fluent.console().background(), Color::DEFAULT_BACKGROUND);
    assert!(fluent.console().events().contains(&ConsoleEvent::Reset));
}

#[test]
fn fluent_read_line_and_into_inner() {
    let console = MemoryConsole::new();
    console.push_input("42");
    let mut fluent = FluentConsole::new(console);
    assert_eq!(fluent.read_line().unwrap(), "42");
    fluent.write("done").unwrap();
    let console = fluent.into_inner();
    assert_eq!(console.output(), "done");
}

#[test]
fn fluent_manual_scope_bounds_a_region() {
    let fluent = FluentConsole::new(MemoryConsole::new());
    {
        let scope = fluent.with_colors(Color::Black, Color::Yellow).unwrap();
        assert_eq!(fluent.console().foreground(), Color::Black);
        scope.release().unwrap();
    }
    assert_eq!(fluent.console().foreground(), Color::DEFAULT_FOREGROUND);
}

// ── adapters ──────────────────────────────────────────────────────────────────

#[test]
fn disabled_ansi_console_tracks_state_without_escapes() {
    // `Never` keeps the state machine exercisable in any test environment.
    let console = inkline::AnsiConsole::with_choice(ColorChoice::Never);
    assert!(!console.colors_enabled());
    let scope = inkline::with_color(&console, Color::Red).unwrap();
    assert_eq!(console.foreground(), Color::Red);
    scope.release().unwrap();
    assert_eq!(console.foreground(), Color::DEFAULT_FOREGROUND);
}
