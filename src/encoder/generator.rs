use crate::encoder::bitstream::{BitBuffer, encode_data};
use crate::encoder::canvas::Canvas;
use crate::encoder::config::{EncoderConfig, debug_enabled};
use crate::encoder::format::FormatInfo;
use crate::encoder::function_patterns::draw_function_patterns;
use crate::encoder::mask::{FixedMask, MaskStrategy, apply_mask};
use crate::encoder::placement::place_bits;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::select_version;
use crate::error::EncodeError;
use crate::models::{Symbol, Version};

/// Data codewords followed by their parity codewords, as a bit stream
fn codeword_stream(payload: &[u8], version: Version) -> Result<BitBuffer, EncodeError> {
    let mut stream = encode_data(payload, version)?;
    let data = stream.to_bytes();
    let ecc = ReedSolomonEncoder::new(version.info().ecc_codewords).ecc(&data);
    stream.append_bytes(&ecc);

    if debug_enabled() {
        eprintln!(
            "[qrsymbol] version {}: {} data codewords, {} ecc codewords",
            version.number(),
            data.len(),
            ecc.len()
        );
    }
    Ok(stream)
}

/// Canvas with function patterns, data and format info, before masking
fn unmasked_canvas(payload: &[u8], version: Version) -> Result<Canvas, EncodeError> {
    let mut canvas = Canvas::new(version.module_count());
    draw_function_patterns(&mut canvas, version);

    let stream = codeword_stream(payload, version)?;
    let placed = place_bits(&mut canvas, stream.bits());
    debug_assert_eq!(placed, stream.len());
    if debug_enabled() {
        eprintln!(
            "[qrsymbol] placed {placed} bits into {} data modules",
            canvas.data_module_count()
        );
    }
    Ok(canvas)
}

/// Encode `text` with an explicit configuration and mask strategy.
///
/// Empty text yields `Ok(None)`: there is nothing to render.
pub fn encode_with<M: MaskStrategy + ?Sized>(
    text: &str,
    config: &EncoderConfig,
    strategy: &M,
) -> Result<Option<Symbol>, EncodeError> {
    if text.is_empty() {
        return Ok(None);
    }

    let payload = text.as_bytes();
    let version = select_version(payload.len())?;
    if debug_enabled() {
        eprintln!(
            "[qrsymbol] {} bytes -> version {} ({}x{})",
            payload.len(),
            version.number(),
            version.module_count(),
            version.module_count()
        );
    }

    let mut canvas = unmasked_canvas(payload, version)?;
    let mask = strategy.select(&canvas);
    let format = FormatInfo::new(config.ec_level, mask);
    format.place(&mut canvas);
    apply_mask(&mut canvas, mask);

    let (modules, function) = canvas.into_grids();
    Ok(Some(Symbol::new(
        version,
        config.ec_level,
        mask,
        modules,
        function,
        config.quiet_zone,
    )))
}

/// Encode `text` with the default configuration and mask pattern 0
pub fn encode(text: &str) -> Result<Option<Symbol>, EncodeError> {
    encode_with(text, &EncoderConfig::default(), &FixedMask::default())
}

/// Lifecycle of a [`SymbolGenerator`]
///
/// Generation is a single synchronous call, so the generator is only ever
/// observed idle or holding a finished symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// No symbol: nothing set yet, empty text, or the last text was rejected
    Idle,
    /// A symbol for the current text is available
    Ready,
}

/// Holds the current text and the symbol generated for it.
///
/// Each call to [`set_text`](Self::set_text) with new text rebuilds the
/// symbol from scratch; setting the same text again is a no-op.
pub struct SymbolGenerator<M: MaskStrategy = FixedMask> {
    config: EncoderConfig,
    strategy: M,
    text: String,
    symbol: Option<Symbol>,
}

impl SymbolGenerator<FixedMask> {
    /// Generator with the default configuration and mask pattern 0
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Generator with mask pattern 0 and the given configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self::with_strategy(config, FixedMask::default())
    }
}

impl Default for SymbolGenerator<FixedMask> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MaskStrategy> SymbolGenerator<M> {
    /// Generator with a custom mask strategy
    pub fn with_strategy(config: EncoderConfig, strategy: M) -> Self {
        Self {
            config,
            strategy,
            text: String::new(),
            symbol: None,
        }
    }

    /// Replace the text and regenerate.
    ///
    /// On error the text is still recorded but the generator drops back to
    /// [`GeneratorState::Idle`] with no symbol.
    pub fn set_text(&mut self, text: &str) -> Result<Option<&Symbol>, EncodeError> {
        if self.text == text && self.symbol.is_some() {
            return Ok(self.symbol.as_ref());
        }

        self.text = text.to_owned();
        self.symbol = None;
        self.symbol = encode_with(text, &self.config, &self.strategy)?;
        Ok(self.symbol.as_ref())
    }

    /// Text most recently passed to `set_text`
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Change the quiet zone; the current symbol is updated in place
    pub fn set_quiet_zone(&mut self, modules: usize) {
        self.config = self.config.with_quiet_zone(modules);
        let quiet_zone = self.config.quiet_zone;
        self.symbol = self.symbol.take().map(|s| s.with_quiet_zone(quiet_zone));
    }

    /// Symbol for the current text, if any
    pub fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Side length of the current symbol, 0 when there is nothing to render
    pub fn module_count(&self) -> usize {
        self.symbol.as_ref().map_or(0, Symbol::module_count)
    }

    /// `Ready` when a symbol is available
    pub fn state(&self) -> GeneratorState {
        if self.symbol.is_some() {
            GeneratorState::Ready
        } else {
            GeneratorState::Idle
        }
    }

    /// Forget the text and symbol
    pub fn clear(&mut self) {
        self.text.clear();
        self.symbol = None;
    }
}
