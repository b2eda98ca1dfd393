//! Character skins
//!
//! A variant pairs a palette with a recolor transform, and optionally a
//! symbol cycle such as the rainbow mane.

use crate::animation::SymbolCycle;
use crate::palette::Palette;
use crate::recolor::Recolor;

/// A named skin: palette, recolor transform and optional symbol cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    name: String,
    palette: Palette,
    transform: Recolor,
    cycle: Option<SymbolCycle>,
}

impl Variant {
    pub fn new(name: impl Into<String>, palette: Palette, transform: Recolor) -> Self {
        Self { name: name.into(), palette, transform, cycle: None }
    }

    /// A master variant: identity transform.
    pub fn master(name: impl Into<String>, palette: Palette) -> Self {
        Self::new(name, palette, Recolor::Identity)
    }

    pub fn with_cycle(mut self, cycle: SymbolCycle) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Same variant with a different palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn transform(&self) -> &Recolor {
        &self.transform
    }

    pub fn cycle(&self) -> Option<&SymbolCycle> {
        self.cycle.as_ref()
    }

    pub fn is_master(&self) -> bool {
        self.transform.is_identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recolor::LinearShift;

    #[test]
    fn test_master_is_identity() {
        let v = Variant::master("white", Palette::default());
        assert!(v.is_master());
        assert!(v.cycle().is_none());
    }

    #[test]
    fn test_derived_variant() {
        let v = Variant::new("pink", Palette::default(), Recolor::Linear(LinearShift::PINK));
        assert!(!v.is_master());
        assert_eq!(v.name(), "pink");
    }

    #[test]
    fn test_with_cycle() {
        let v = Variant::master("rainbow", Palette::default())
            .with_cycle(SymbolCycle::new(vec!['m', '1']).with_symbol('m', 0));
        assert_eq!(v.cycle().map(|c| c.resolve('m', 1)), Some('1'));
    }
}
