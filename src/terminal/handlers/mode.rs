//! DEC private mode handler (CSI ? n h / CSI ? n l).
//!
//! Only cursor visibility (25) has an effect. Alternate screen, local echo
//! and mouse reporting modes are accepted and ignored.

use tracing::trace;

use crate::error::SequenceError;
use crate::glyph::GlyphRenderer;
use crate::terminal::tokenizer::Sequence;
use crate::terminal::Screen;

const CURSOR_VISIBLE: usize = 25;

const IGNORED_MODES: &[usize] = &[
    1,    // application cursor keys
    12,   // local echo / cursor blink
    47,   // alternate screen
    1000, // mouse reporting
    1002, // mouse button-event tracking
    1003, // mouse any-event tracking
    1006, // SGR mouse encoding
    1047, // alternate screen
    1049, // alternate screen with saved cursor
    2004, // bracketed paste
];

impl<G: GlyphRenderer> Screen<G> {
    pub(in crate::terminal) fn set_mode(
        &mut self,
        seq: &Sequence,
        enable: bool,
    ) -> Result<(), SequenceError> {
        let first = seq
            .param(0)
            .ok_or_else(|| seq.unsupported("missing mode"))?;
        let first = first
            .strip_prefix('?')
            .ok_or_else(|| seq.unsupported("unsupported ANSI mode"))?;

        let modes = std::iter::once(first)
            .chain(seq.params.iter().skip(1).map(String::as_str))
            .map(|mode| match mode.parse::<usize>() {
                Ok(m) if m == CURSOR_VISIBLE || IGNORED_MODES.contains(&m) => Ok(m),
                _ => Err(seq.unsupported("unsupported private mode")),
            })
            .collect::<Result<Vec<_>, _>>()?;

        for mode in modes {
            if mode == CURSOR_VISIBLE {
                self.cursor.visible = enable;
            } else {
                trace!("Ignoring private mode {} ({})", mode, enable);
            }
        }
        Ok(())
    }
}
