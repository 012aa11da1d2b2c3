use std::fmt;

use log::debug;

use crate::color::DotColor;

type Listener = Box<dyn FnMut(&[DotColor])>;

/// The palette colors new dots may take.
///
/// Selection order is kept so random picks index deterministically.
/// Listeners are called after every toggle with the complete new selection.
pub struct ColorSelection {
    selected: Vec<DotColor>,
    listeners: Vec<Listener>,
}

impl Default for ColorSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSelection")
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ColorSelection {
    /// Starts with the first palette entry selected.
    pub fn new() -> Self {
        Self {
            selected: vec![DotColor::PALETTE[0]],
            listeners: Vec::new(),
        }
    }

    pub fn toggle(&mut self, color: DotColor) {
        match self.selected.iter().position(|c| *c == color) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(color),
        }
        debug!("toggled {}, selection is now {:?}", color.name(), self.selected);

        for listener in &mut self.listeners {
            listener(&self.selected);
        }
    }

    pub fn snapshot(&self) -> &[DotColor] {
        &self.selected
    }

    pub fn is_selected(&self, color: DotColor) -> bool {
        self.selected.contains(&color)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&[DotColor]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}
