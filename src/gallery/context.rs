use crate::logger::LogBuffer;
use crate::symbols::SymbolService;
use crate::theme::ThemeRegistry;

/// Shared state every page renders with.
pub struct GalleryContext {
    pub registry: ThemeRegistry,
    pub symbols: SymbolService,
    pub debug_show_sentinels: bool,
    pub logs: LogBuffer,
}

impl GalleryContext {
    pub fn new(registry: ThemeRegistry, symbols: SymbolService, logs: LogBuffer) -> Self {
        Self {
            registry,
            symbols,
            debug_show_sentinels: false,
            logs,
        }
    }
}

impl Default for GalleryContext {
    fn default() -> Self {
        Self::new(ThemeRegistry::default(), SymbolService::default(), LogBuffer::new())
    }
}
