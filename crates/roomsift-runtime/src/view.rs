use roomsift_engine::StatusBreakdown;
use roomsift_types::ItemId;
use std::collections::{BTreeMap, HashMap, HashSet};

/// The on-screen listing. Only the presenter writes to it.
///
/// Slots that a page may not have (count label, placeholder, breakdown,
/// control widgets) default to no-ops, so a host without them simply does
/// not get that feature.
pub trait ListView {
    /// Display an item that is currently hidden or leaving. `animate` starts
    /// an entrance transition that [`finish_reveal`](Self::finish_reveal) ends.
    fn reveal(&mut self, id: &ItemId, animate: bool);

    fn finish_reveal(&mut self, _id: &ItemId) {}

    /// Start the exit transition; [`hide`](Self::hide) follows when it ends.
    fn begin_exit(&mut self, _id: &ItemId) {}

    fn hide(&mut self, id: &ItemId);

    /// The item left the collection entirely.
    fn remove(&mut self, id: &ItemId);

    /// Move the visible items into this display order.
    fn reorder(&mut self, order: &[ItemId]);

    fn set_count_label(&mut self, _label: &str) {}

    fn show_placeholder(&mut self, _title: &str, _hint: &str) {}

    fn hide_placeholder(&mut self) {}

    fn show_breakdown(&mut self, _breakdown: &StatusBreakdown) {}

    /// Write a value back into an input control (range correction, quick filter).
    fn set_control_value(&mut self, _control: &str, _value: &str) {}

    fn reset_controls(&mut self) {}

    /// Highlight the active quick-filter button, or none.
    fn set_quick_filter(&mut self, _active: Option<&str>) {}
}

/// One call made on a [`MemoryView`], in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Reveal { id: ItemId, animate: bool },
    FinishReveal(ItemId),
    BeginExit(ItemId),
    Hide(ItemId),
    Remove(ItemId),
    Reorder(Vec<ItemId>),
    CountLabel(String),
    ShowPlaceholder,
    HidePlaceholder,
    Breakdown(StatusBreakdown),
    ControlValue { control: String, value: String },
    ResetControls,
    QuickFilter(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entering,
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub title: String,
    pub hint: String,
}

/// In-memory listing that behaves like the page's list container.
///
/// `reorder` follows append-to-container semantics: the listed items move to
/// the end in the given order, everything else keeps its place in front.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    dom_order: Vec<ItemId>,
    displayed: HashSet<ItemId>,
    transitions: HashMap<ItemId, Transition>,
    count_label: Option<String>,
    placeholder: Option<Placeholder>,
    placeholder_inserts: usize,
    breakdown: Option<StatusBreakdown>,
    controls: BTreeMap<String, String>,
    quick_filter: Option<String>,
    calls: Vec<ViewCall>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listing whose items were all rendered visible by the server.
    pub fn with_items<'a>(ids: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let mut view = Self::new();
        for id in ids {
            view.dom_order.push(id.clone());
            view.displayed.insert(id.clone());
        }
        view
    }

    /// Displayed items in on-screen order, including ones still exiting.
    pub fn displayed(&self) -> Vec<&ItemId> {
        self.dom_order
            .iter()
            .filter(|id| self.displayed.contains(*id))
            .collect()
    }

    /// Displayed items that are not on their way out.
    pub fn settled(&self) -> Vec<&ItemId> {
        self.displayed()
            .into_iter()
            .filter(|id| self.transitions.get(*id) != Some(&Transition::Exiting))
            .collect()
    }

    pub fn is_displayed(&self, id: &ItemId) -> bool {
        self.displayed.contains(id)
    }

    pub fn transition(&self, id: &ItemId) -> Option<Transition> {
        self.transitions.get(id).copied()
    }

    pub fn count_label(&self) -> Option<&str> {
        self.count_label.as_deref()
    }

    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// How many times a placeholder was inserted while one already existed.
    pub fn duplicate_placeholders(&self) -> usize {
        self.placeholder_inserts.saturating_sub(1)
    }

    pub fn breakdown(&self) -> Option<&StatusBreakdown> {
        self.breakdown.as_ref()
    }

    pub fn control(&self, name: &str) -> Option<&str> {
        self.controls.get(name).map(String::as_str)
    }

    pub fn quick_filter(&self) -> Option<&str> {
        self.quick_filter.as_deref()
    }

    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }
}

impl ListView for MemoryView {
    fn reveal(&mut self, id: &ItemId, animate: bool) {
        if !self.dom_order.contains(id) {
            self.dom_order.push(id.clone());
        }
        self.displayed.insert(id.clone());
        if animate {
            self.transitions.insert(id.clone(), Transition::Entering);
        } else {
            self.transitions.remove(id);
        }
        self.calls.push(ViewCall::Reveal {
            id: id.clone(),
            animate,
        });
    }

    fn finish_reveal(&mut self, id: &ItemId) {
        self.transitions.remove(id);
        self.calls.push(ViewCall::FinishReveal(id.clone()));
    }

    fn begin_exit(&mut self, id: &ItemId) {
        self.transitions.insert(id.clone(), Transition::Exiting);
        self.calls.push(ViewCall::BeginExit(id.clone()));
    }

    fn hide(&mut self, id: &ItemId) {
        self.displayed.remove(id);
        self.transitions.remove(id);
        self.calls.push(ViewCall::Hide(id.clone()));
    }

    fn remove(&mut self, id: &ItemId) {
        self.dom_order.retain(|existing| existing != id);
        self.displayed.remove(id);
        self.transitions.remove(id);
        self.calls.push(ViewCall::Remove(id.clone()));
    }

    fn reorder(&mut self, order: &[ItemId]) {
        self.dom_order.retain(|id| !order.contains(id));
        self.dom_order.extend(order.iter().cloned());
        self.calls.push(ViewCall::Reorder(order.to_vec()));
    }

    fn set_count_label(&mut self, label: &str) {
        self.count_label = Some(label.to_string());
        self.calls.push(ViewCall::CountLabel(label.to_string()));
    }

    fn show_placeholder(&mut self, title: &str, hint: &str) {
        self.placeholder_inserts += 1;
        self.placeholder = Some(Placeholder {
            title: title.to_string(),
            hint: hint.to_string(),
        });
        self.calls.push(ViewCall::ShowPlaceholder);
    }

    fn hide_placeholder(&mut self) {
        if self.placeholder.take().is_some() {
            self.placeholder_inserts = self.placeholder_inserts.saturating_sub(1);
        }
        self.calls.push(ViewCall::HidePlaceholder);
    }

    fn show_breakdown(&mut self, breakdown: &StatusBreakdown) {
        self.breakdown = Some(breakdown.clone());
        self.calls.push(ViewCall::Breakdown(breakdown.clone()));
    }

    fn set_control_value(&mut self, control: &str, value: &str) {
        self.controls.insert(control.to_string(), value.to_string());
        self.calls.push(ViewCall::ControlValue {
            control: control.to_string(),
            value: value.to_string(),
        });
    }

    fn reset_controls(&mut self) {
        self.controls.clear();
        self.calls.push(ViewCall::ResetControls);
    }

    fn set_quick_filter(&mut self, active: Option<&str>) {
        self.quick_filter = active.map(str::to_string);
        self.calls.push(ViewCall::QuickFilter(self.quick_filter.clone()));
    }
}
