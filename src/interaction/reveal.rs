#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RevealElement {
    observed: bool,
    visible: bool,
}

/// One-shot reveal bookkeeping for the scroll animator. Each slot belongs to
/// one `.reveal` element; once a slot is revealed it stays revealed and no
/// later intersection can touch it again.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    slots: Vec<RevealElement>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![RevealElement { observed: true, visible: false }; len],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Records an intersection for the slot. Returns `true` only on the first
    /// call for a still-observed slot; the caller reveals the element and
    /// unobserves it exactly when this returns `true`.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.observed && !slot.visible => {
                slot.observed = false;
                slot.visible = true;
                true
            }
            _ => false,
        }
    }

    /// Fallback when viewport intersection observation is unavailable:
    /// everything becomes visible at init.
    pub fn reveal_all(&mut self) {
        for slot in &mut self.slots {
            slot.observed = false;
            slot.visible = true;
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).map_or(false, |s| s.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_exactly_once_per_slot() {
        let mut set = RevealSet::new(3);
        assert!(set.mark_visible(1));
        assert!(set.is_visible(1));
        // Re-entering the viewport after reveal changes nothing.
        assert!(!set.mark_visible(1));
        assert!(set.is_visible(1));
    }

    #[test]
    fn slots_are_independent() {
        let mut set = RevealSet::new(2);
        assert!(set.mark_visible(0));
        assert!(!set.is_visible(1));
        assert!(set.mark_visible(1));
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut set = RevealSet::new(1);
        assert!(!set.mark_visible(7));
    }

    #[test]
    fn reveal_all_marks_every_slot() {
        let mut set = RevealSet::new(4);
        set.reveal_all();
        for i in 0..set.len() {
            assert!(set.is_visible(i));
            assert!(!set.mark_visible(i));
        }
    }
}
