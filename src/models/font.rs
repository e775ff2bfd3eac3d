//! Font styling applied to the text area.

pub const DEFAULT_FONT_FAMILIES: [&str; 4] = ["Arial", "Times New Roman", "Courier New", "Verdana"];
pub const DEFAULT_FONT_SIZE: u16 = 12;
pub const MIN_FONT_SIZE: u16 = 1;
pub const MAX_FONT_SIZE: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontAttribute {
    Bold,
    Italic,
    Underline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyle {
    families: Vec<String>,
    family: usize,
    size: u16,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontStyle {
    /// An empty family list falls back to the defaults.
    pub fn new(families: Vec<String>, size: u16) -> Self {
        let families = if families.is_empty() {
            DEFAULT_FONT_FAMILIES.iter().map(|s| s.to_string()).collect()
        } else {
            families
        };
        Self {
            families,
            family: 0,
            size: size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn family(&self) -> &str {
        &self.families[self.family]
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn cycle_family(&mut self) {
        self.family = (self.family + 1) % self.families.len();
    }

    pub fn set_size(&mut self, size: u16) -> bool {
        let size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        let changed = size != self.size;
        self.size = size;
        changed
    }

    pub fn step_size(&mut self, delta: i32) -> bool {
        let target = (self.size as i32 + delta).clamp(MIN_FONT_SIZE as i32, MAX_FONT_SIZE as i32);
        self.set_size(target as u16)
    }

    pub fn toggle(&mut self, attr: FontAttribute) {
        let flag = match attr {
            FontAttribute::Bold => &mut self.bold,
            FontAttribute::Italic => &mut self.italic,
            FontAttribute::Underline => &mut self.underline,
        };
        *flag = !*flag;
    }

    pub fn is_set(&self, attr: FontAttribute) -> bool {
        match attr {
            FontAttribute::Bold => self.bold,
            FontAttribute::Italic => self.italic,
            FontAttribute::Underline => self.underline,
        }
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_FONT_SIZE)
    }
}
