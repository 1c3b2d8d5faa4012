//! Single-open FAQ accordion.

/// Open/closed flags for a list of accordion items; at most one is open
/// after any toggle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    /// Starts from the markup's state. Several items may be marked open in
    /// HTML; the first toggle collapses the extras.
    pub fn new(initially_open: impl IntoIterator<Item = bool>) -> Self {
        Self {
            open: initially_open.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|open| *open)
    }

    /// Question click: close everything, then open `index` if it was closed.
    /// Returns the item left open, if any.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.open.len() {
            return self.open_index();
        }
        let was_open = self.open[index];
        self.open.iter_mut().for_each(|open| *open = false);
        if !was_open {
            self.open[index] = true;
            Some(index)
        } else {
            None
        }
    }

    pub fn states(&self) -> &[bool] {
        &self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_rest() {
        let mut accordion = Accordion::new([true, false, false]);
        assert_eq!(accordion.toggle(2), Some(2));
        assert_eq!(accordion.states(), &[false, false, true]);
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut accordion = Accordion::new([false, true]);
        assert_eq!(accordion.toggle(1), None);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn several_open_in_markup_collapse_on_first_toggle() {
        let mut accordion = Accordion::new([true, true, false]);
        accordion.toggle(0);
        assert_eq!(accordion.states(), &[false, false, false]);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut accordion = Accordion::new([false, true]);
        assert_eq!(accordion.toggle(7), Some(1));
        assert_eq!(accordion.states(), &[false, true]);
    }
}
