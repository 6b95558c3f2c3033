//! Template rendering service - the directive-dispatch engine.
//!
//! Every public write in the workspace funnels through [`TemplateRenderer`]:
//! the one-shot facade, the fluent session, and the set/restore sugar all
//! delegate here, so placeholder scanning and push/pop bookkeeping exist in
//! exactly one place.

use tracing::{instrument, trace};

use crate::{
    application::{
        error::RenderError,
        ports::{Console, StreamKind},
    },
    domain::{ColorHistory, Message, Segment, Template, Value, scan},
    error::InklineResult,
};

/// Format tags that route a color directive to the background channel.
/// Exact, case-sensitive match.
const BACKGROUND_TAGS: [&str; 2] = ["background", "bg"];

/// Renders messages against a console, in pattern order.
///
/// Borrows its collaborators: the console belongs to the caller (it may be
/// wrapped in an outer [`super::ColorScope`]), and the history belongs to
/// the owning context: a fresh one per one-shot call, a persistent one per
/// fluent session.
pub struct TemplateRenderer<'a> {
    console: &'a dyn Console,
    history: &'a mut ColorHistory,
}

impl<'a> TemplateRenderer<'a> {
    pub fn new(console: &'a dyn Console, history: &'a mut ColorHistory) -> Self {
        Self { console, history }
    }

    /// Render one message to the given stream.
    ///
    /// `Raw` text is written verbatim. A `Template` is scanned completely
    /// first (syntax errors surface before any output), then its segments
    /// are processed strictly left to right: literals are written, color
    /// directives mutate console state through the port, restore markers pop
    /// the matching history stack, and printable values are formatted and
    /// written.
    ///
    /// # Errors
    ///
    /// - `TemplateError` for a malformed pattern, before any write.
    /// - `RenderError::ArgumentOutOfRange` when a placeholder addresses past
    ///   the bound arguments; earlier output has already reached the stream.
    /// - Any console failure, propagated unmodified.
    #[instrument(skip_all, fields(stream = %stream))]
    pub fn render(&mut self, stream: StreamKind, message: &Message) -> InklineResult<()> {
        match message {
            Message::Raw(text) => self.console.write(stream, text),
            Message::Template(template) => self.render_template(stream, template),
        }
    }

    fn render_template(&mut self, stream: StreamKind, template: &Template) -> InklineResult<()> {
        // Full pre-pass: a malformed template fails here, with nothing written.
        let segments = scan(template.pattern())?;

        for segment in &segments {
            match segment {
                Segment::Literal(text) => self.console.write(stream, text)?,
                Segment::Placeholder { index, format } => {
                    self.apply_argument(stream, template, *index, format.as_deref())?;
                }
            }
        }
        Ok(())
    }

    /// Resolve and dispatch a single placeholder.
    ///
    /// Resolution is repeatable: the same index may appear in any number of
    /// placeholders and is looked up from the bound list each time.
    fn apply_argument(
        &mut self,
        stream: StreamKind,
        template: &Template,
        index: usize,
        format: Option<&str>,
    ) -> InklineResult<()> {
        let value = template
            .args()
            .get(index)
            .ok_or(RenderError::ArgumentOutOfRange {
                index,
                available: template.args().len(),
            })?;

        match value {
            // Background-wins tie-break: the tag is the sole discriminator.
            Value::Color(color) if is_background_tag(format) => {
                trace!(%color, "set background");
                self.history.push_background(self.console.background());
                self.console.set_background(*color)
            }
            Value::Color(color) => {
                trace!(%color, "set foreground");
                self.history.push_foreground(self.console.foreground());
                self.console.set_foreground(*color)
            }
            Value::RestoreBackground => match self.history.pop_background() {
                Some(color) => self.console.set_background(color),
                // Empty stack: defined no-op, never an error.
                None => Ok(()),
            },
            Value::RestoreColor => match self.history.pop_foreground() {
                Some(color) => self.console.set_foreground(color),
                None => Ok(()),
            },
            printable => self.console.write(stream, &printable.render(format)),
        }
    }
}

fn is_background_tag(format: Option<&str>) -> bool {
    format.is_some_and(|tag| BACKGROUND_TAGS.contains(&tag))
}

// ── tests ─────────────────────────────────────────────────────────────────────
