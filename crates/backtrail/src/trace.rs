//! Stack capture and rendering.
//!
//! [`TraceCapture`] walks the call stack at a point in time without resolving
//! symbols; resolution is deferred to [`TracePrinter::render`], so building an
//! error is cheap and only an error that actually surfaces pays for
//! symbolization.

use std::fmt;

use smallvec::SmallVec;

/// A raw call-stack snapshot.
///
/// Frames are stored unresolved; identity is the frame instruction pointers,
/// which stay stable however often the capture is moved or re-rendered.
/// Captures are move-only, like the results that carry them.
pub struct TraceCapture {
    frames: SmallVec<[backtrace::Frame; 8]>,
}

impl TraceCapture {
    /// Default number of frames kept by [`crate::err`].
    pub const DEFAULT_DEPTH: usize = 32;

    /// Walk the current call stack, dropping the innermost `skip` frames and
    /// keeping at most `depth` of the rest.
    ///
    /// Kept out of line so the frame budget of the capture machinery itself
    /// stays the same across call sites.
    #[inline(never)]
    #[must_use]
    pub fn capture(depth: usize, skip: usize) -> Self {
        let mut frames = SmallVec::new();
        let mut walked = 0usize;
        backtrace::trace(|frame| {
            walked += 1;
            if walked <= skip {
                return true;
            }
            if frames.len() >= depth {
                return false;
            }
            frames.push(frame.clone());
            frames.len() < depth
        });
        Self { frames }
    }

    /// The captured frames, innermost first.
    #[must_use]
    pub fn frames(&self) -> &[backtrace::Frame] {
        &self.frames
    }

    /// Number of captured frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the capture holds no frames at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Render with the default [`TracePrinter`].
    #[must_use]
    pub fn render(&self) -> String {
        TracePrinter::default().render(self)
    }
}

impl fmt::Debug for TraceCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceCapture")
            .field("frames", &self.frames.len())
            .finish()
    }
}

impl fmt::Display for TraceCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// How [`TracePrinter`] decides whether to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Never colorize.
    Never,
    /// Colorize when standard error is a terminal.
    #[default]
    Automatic,
    /// Always colorize.
    Always,
}

/// Symbolizes and formats a [`TraceCapture`] into human-readable text.
///
/// Output is one numbered entry per frame: index, optional hex instruction
/// address, symbol name, and a `file:line` location when debug info is
/// available. Color output requires the `colored-traces` feature; without it
/// [`TracePrinter::color`] is inert.
#[derive(Debug, Clone)]
pub struct TracePrinter {
    /// Include hex instruction addresses in each frame line.
    pub addresses: bool,
    /// ANSI color policy.
    pub color: ColorMode,
}

impl Default for TracePrinter {
    fn default() -> Self {
        Self {
            addresses: true,
            color: ColorMode::Automatic,
        }
    }
}

impl TracePrinter {
    /// Resolve symbols and format every frame of `trace`.
    #[must_use]
    pub fn render(&self, trace: &TraceCapture) -> String {
        let mut out = String::new();
        out.push_str("stack trace (most recent call first):\n");
        if trace.is_empty() {
            out.push_str("  <no frames captured>\n");
            return out;
        }
        for (index, frame) in trace.frames().iter().enumerate() {
            let mut resolved = false;
            backtrace::resolve_frame(frame, |symbol| {
                let name = symbol
                    .name()
                    .map_or_else(|| String::from("<unknown>"), |name| name.to_string());
                let location = symbol
                    .filename()
                    .zip(symbol.lineno())
                    .map(|(file, line)| format!("{}:{line}", file.display()));
                self.write_frame(&mut out, index, frame, &name, location.as_deref());
                resolved = true;
            });
            if !resolved {
                self.write_frame(&mut out, index, frame, "<unresolved>", None);
            }
        }
        out
    }

    fn write_frame(
        &self,
        out: &mut String,
        index: usize,
        frame: &backtrace::Frame,
        name: &str,
        location: Option<&str>,
    ) {
        use std::fmt::Write as _;

        let head = format!("#{index:<3}");
        if self.addresses {
            let _ = writeln!(
                out,
                "{} {:#018x} in {}",
                self.style_index(&head),
                frame.ip() as usize,
                self.style_symbol(name),
            );
        } else {
            let _ = writeln!(out, "{} {}", self.style_index(&head), self.style_symbol(name));
        }
        if let Some(location) = location {
            let _ = writeln!(out, "        at {}", self.style_location(location));
        }
    }

    #[cfg(feature = "colored-traces")]
    fn color_enabled(&self) -> bool {
        use std::io::IsTerminal as _;

        match self.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Automatic => std::io::stderr().is_terminal(),
        }
    }

    #[cfg(feature = "colored-traces")]
    fn style_index(&self, text: &str) -> String {
        use colored::Colorize as _;

        if self.color_enabled() {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-traces"))]
    fn style_index(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(feature = "colored-traces")]
    fn style_symbol(&self, text: &str) -> String {
        use colored::Colorize as _;

        if self.color_enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-traces"))]
    fn style_symbol(&self, text: &str) -> String {
        text.to_string()
    }

    #[cfg(feature = "colored-traces")]
    fn style_location(&self, text: &str) -> String {
        use colored::Colorize as _;

        if self.color_enabled() {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    #[cfg(not(feature = "colored-traces"))]
    fn style_location(&self, text: &str) -> String {
        text.to_string()
    }
}
