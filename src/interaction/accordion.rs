/// Single-open accordion: remembers at most one expanded entry.
///
/// Holding one optional index instead of a set is what guarantees that
/// expanding an entry collapses whichever one was open before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_expanded_initially() {
        let faq = Accordion::default();
        assert_eq!(faq.open_index(), None);
        assert!(!faq.is_open(0));
    }

    #[test]
    fn toggling_same_entry_twice_collapses_it() {
        let mut faq = Accordion::default();
        faq.toggle(2);
        assert!(faq.is_open(2));
        faq.toggle(2);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn opening_another_entry_closes_the_previous_one() {
        let mut faq = Accordion::default();
        faq.toggle(1);
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn at_most_one_entry_open_after_any_sequence() {
        let mut faq = Accordion::default();
        let presses = [0, 1, 1, 3, 2, 2, 0, 3, 3, 1, 0, 0, 2];
        for index in presses {
            faq.toggle(index);
            let open = (0..4).filter(|i| faq.is_open(*i)).count();
            assert!(open <= 1, "{open} entries open after toggling {index}");
        }
    }
}
