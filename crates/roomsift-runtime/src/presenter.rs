use crate::config::PresenterSettings;
use crate::controls::ControlSet;
use crate::debounce::Debouncer;
use crate::notify::{LogNotifier, NotificationLevel, Notifier};
use crate::timer::TimerQueue;
use crate::view::ListView;
use roomsift_engine::{evaluate, Evaluation, FilterEngine};
use roomsift_types::{FilterCriteria, ItemId, ListItem};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, trace};

/// What the presenter last told the view about one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Shown,
    /// Revealed; the entrance transition scheduled by `generation` is running.
    Entering { generation: u64 },
    /// Leaving; hidden once the exit transition scheduled by `generation` ends.
    Exiting { generation: u64 },
    Hidden,
}

impl DisplayState {
    /// Counts as visible for the current evaluation.
    pub fn is_visible(&self) -> bool {
        matches!(self, DisplayState::Shown | DisplayState::Entering { .. })
    }
}

/// State of the quick-filter button row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuickFilter {
    #[default]
    Inactive,
    Active(String),
}

impl QuickFilter {
    /// Pressing the active button turns it off; any other button takes over.
    pub fn toggle(&self, value: &str) -> QuickFilter {
        match self {
            QuickFilter::Active(current) if current == value => QuickFilter::Inactive,
            _ => QuickFilter::Active(value.to_string()),
        }
    }

    pub fn active(&self) -> Option<&str> {
        match self {
            QuickFilter::Active(value) => Some(value),
            QuickFilter::Inactive => None,
        }
    }
}

/// Discrete input delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<I> {
    /// A control's value changed (keystroke, select change, number input).
    ControlChanged { name: String, value: String },
    /// The filter form was submitted.
    Submit,
    ClearFilters,
    /// A quick-filter button was pressed.
    QuickFilter(String),
    ItemAdded(I),
    ItemRemoved(ItemId),
    ItemReplaced(I),
}

impl<I> UiEvent<I> {
    pub fn control(name: &str, value: impl Into<String>) -> Self {
        UiEvent::ControlChanged {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug)]
enum TransitionTimer {
    EnterDone { id: ItemId, generation: u64 },
    ExitDone { id: ItemId, generation: u64 },
}

/// Reconciles engine decisions with a [`ListView`].
///
/// The presenter owns the typed item collection, the control state and every
/// pending timer. It is the only writer of the view. Each evaluation bumps a
/// generation counter; transition timers carry the generation that scheduled
/// them and are dropped on firing if the item has moved on since.
pub struct ListPresenter<E, V, N = LogNotifier>
where
    E: FilterEngine,
    V: ListView,
    N: Notifier,
{
    engine: E,
    view: V,
    notifier: N,
    items: Vec<E::Item>,
    controls: ControlSet,
    quick_filter: QuickFilter,
    search: Debouncer<()>,
    timers: TimerQueue<TransitionTimer>,
    display: HashMap<ItemId, DisplayState>,
    generation: u64,
    placeholder_shown: bool,
    last: Option<Evaluation>,
    settings: PresenterSettings,
    evaluations: usize,
}

impl<E, V, N> ListPresenter<E, V, N>
where
    E: FilterEngine,
    V: ListView,
    N: Notifier,
{
    /// Take over a listing whose items are all currently displayed.
    pub fn new(
        engine: E,
        view: V,
        notifier: N,
        items: Vec<E::Item>,
        settings: PresenterSettings,
    ) -> Self {
        let display = items
            .iter()
            .map(|item| (item.id().clone(), DisplayState::Shown))
            .collect();

        Self {
            engine,
            view,
            notifier,
            items,
            controls: ControlSet::for_criteria::<E::Criteria>(),
            quick_filter: QuickFilter::Inactive,
            search: Debouncer::new(settings.timing.search_debounce()),
            timers: TimerQueue::new(),
            display,
            generation: 0,
            placeholder_shown: false,
            last: None,
            settings,
            evaluations: 0,
        }
    }

    /// Run the first evaluation so the view matches the (empty) controls.
    pub fn start(&mut self, now: Instant) {
        self.evaluate(now);
    }

    pub fn handle(&mut self, event: UiEvent<E::Item>, now: Instant) {
        match event {
            UiEvent::ControlChanged { name, value } => self.control_changed(&name, value, now),
            UiEvent::Submit => {
                self.search.cancel();
                self.evaluate(now);
            }
            UiEvent::ClearFilters => self.clear_filters(now),
            UiEvent::QuickFilter(value) => self.press_quick_filter(&value, now),
            UiEvent::ItemAdded(item) => self.upsert(item, now),
            UiEvent::ItemReplaced(item) => self.upsert(item, now),
            UiEvent::ItemRemoved(id) => self.remove(&id, now),
        }
    }

    /// Fire every debounce and transition timer due at `now`, earliest first.
    /// Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        loop {
            let search_due = self.search.deadline().filter(|deadline| *deadline <= now);
            let timer_due = self.timers.next_deadline().filter(|deadline| *deadline <= now);

            match (search_due, timer_due) {
                (Some(search_at), timer_at) if timer_at.is_none_or(|t| search_at < t) => {
                    self.search.poll(search_at);
                    debug!("search input settled");
                    self.evaluate(search_at);
                }
                (_, Some(timer_at)) => {
                    if let Some(timer) = self.timers.pop_due(timer_at) {
                        self.fire(timer);
                    }
                }
                _ => break,
            }
            fired += 1;
        }
        fired
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.timers.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every remaining timer, however far in the future.
    pub fn settle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.next_deadline() {
            fired += self.tick(deadline);
        }
        fired
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn items(&self) -> &[E::Item] {
        &self.items
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    /// Criteria described by the current control values.
    pub fn criteria(&self) -> E::Criteria {
        self.controls.criteria()
    }

    pub fn quick_filter(&self) -> &QuickFilter {
        &self.quick_filter
    }

    pub fn last_evaluation(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    pub fn display_state(&self, id: &ItemId) -> Option<DisplayState> {
        self.display.get(id).copied()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of evaluations run so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    fn control_changed(&mut self, name: &str, value: String, now: Instant) {
        if name == <E::Criteria as FilterCriteria>::SEARCH_CONTROL {
            self.controls.set(name, value);
            self.search.schedule(now, ());
            trace!(control = name, "search evaluation scheduled");
            return;
        }

        if let Some(correction) = self.controls.set(name, value) {
            self.view
                .set_control_value(correction.control, &correction.value);
        }

        if <E::Criteria as FilterCriteria>::QUICK_FILTER_CONTROL == Some(name)
            && self.quick_filter.active() != self.controls.get(name)
        {
            self.quick_filter = QuickFilter::Inactive;
            self.view.set_quick_filter(None);
        }

        // The evaluation below reads the latest search text as well.
        self.search.cancel();
        self.evaluate(now);
    }

    fn clear_filters(&mut self, now: Instant) {
        self.controls.reset();
        self.view.reset_controls();
        self.search.cancel();
        self.quick_filter = QuickFilter::Inactive;
        self.view.set_quick_filter(None);
        self.evaluate(now);
        self.notifier
            .notify(&self.settings.filters_cleared, NotificationLevel::Info);
    }

    fn press_quick_filter(&mut self, value: &str, now: Instant) {
        let Some(control) = <E::Criteria as FilterCriteria>::QUICK_FILTER_CONTROL else {
            debug!(value, "listing has no quick filters");
            return;
        };

        self.quick_filter = self.quick_filter.toggle(value);
        let active = self.quick_filter.active().unwrap_or_default().to_string();
        self.controls.set(control, active.clone());
        self.view.set_control_value(control, &active);
        self.view.set_quick_filter(self.quick_filter.active());
        self.search.cancel();
        self.evaluate(now);
    }

    fn upsert(&mut self, item: E::Item, now: Instant) {
        let id = item.id().clone();
        match self.items.iter().position(|existing| existing.id() == &id) {
            Some(index) => {
                debug!(%id, "item replaced");
                self.items[index] = item;
            }
            None => {
                debug!(%id, "item added");
                self.items.push(item);
                self.display.insert(id, DisplayState::Hidden);
            }
        }
        self.evaluate(now);
    }

    fn remove(&mut self, id: &ItemId, now: Instant) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() == before {
            debug!(%id, "remove for unknown item ignored");
            return;
        }
        self.display.remove(id);
        self.view.remove(id);
        self.evaluate(now);
    }

    fn evaluate(&mut self, now: Instant) {
        self.generation += 1;
        self.evaluations += 1;
        let generation = self.generation;

        let criteria: E::Criteria = self.controls.criteria();
        let evaluation = evaluate(&self.engine, &criteria, &self.items);

        for decision in &evaluation.decisions {
            let state = self
                .display
                .get(&decision.id)
                .copied()
                .unwrap_or(DisplayState::Hidden);

            let next = match (decision.visible, state) {
                (true, DisplayState::Hidden | DisplayState::Exiting { .. }) => {
                    self.show(&decision.id, &evaluation, generation, now)
                }
                (false, DisplayState::Shown | DisplayState::Entering { .. }) => {
                    self.conceal(&decision.id, generation, now)
                }
                (_, unchanged) => unchanged,
            };
            self.display.insert(decision.id.clone(), next);
        }

        self.view.reorder(&evaluation.order);

        let count = evaluation.visible_count();
        self.view
            .set_count_label(&self.settings.labels.count_label(count));

        if count == 0 && !self.placeholder_shown {
            self.view.show_placeholder(
                &self.settings.labels.empty_title,
                &self.settings.labels.empty_hint,
            );
            self.placeholder_shown = true;
        } else if count > 0 && self.placeholder_shown {
            self.view.hide_placeholder();
            self.placeholder_shown = false;
        }

        if let Some(breakdown) = &evaluation.breakdown {
            self.view.show_breakdown(breakdown);
        }

        debug!(
            generation,
            visible = count,
            total = self.items.len(),
            unconstrained = criteria.is_unconstrained(),
            "listing evaluated"
        );
        self.last = Some(evaluation);
    }

    fn show(
        &mut self,
        id: &ItemId,
        evaluation: &Evaluation,
        generation: u64,
        now: Instant,
    ) -> DisplayState {
        if !self.settings.timing.transitions {
            self.view.reveal(id, false);
            return DisplayState::Shown;
        }

        let rank = evaluation.rank(id).unwrap_or_default();
        self.view.reveal(id, true);
        self.timers.schedule(
            now + self.settings.timing.enter_delay(rank),
            TransitionTimer::EnterDone {
                id: id.clone(),
                generation,
            },
        );
        DisplayState::Entering { generation }
    }

    fn conceal(&mut self, id: &ItemId, generation: u64, now: Instant) -> DisplayState {
        if !self.settings.timing.transitions {
            self.view.hide(id);
            return DisplayState::Hidden;
        }

        self.view.begin_exit(id);
        self.timers.schedule(
            now + self.settings.timing.exit_transition(),
            TransitionTimer::ExitDone {
                id: id.clone(),
                generation,
            },
        );
        DisplayState::Exiting { generation }
    }

    fn fire(&mut self, timer: TransitionTimer) {
        match timer {
            TransitionTimer::EnterDone { id, generation } => {
                if self.display.get(&id) == Some(&DisplayState::Entering { generation }) {
                    self.view.finish_reveal(&id);
                    self.display.insert(id, DisplayState::Shown);
                } else {
                    debug!(%id, generation, "stale entrance timer dropped");
                }
            }
            TransitionTimer::ExitDone { id, generation } => {
                if self.display.get(&id) == Some(&DisplayState::Exiting { generation }) {
                    self.view.hide(&id);
                    self.display.insert(id, DisplayState::Hidden);
                } else {
                    debug!(%id, generation, "stale exit timer dropped");
                }
            }
        }
    }
}
