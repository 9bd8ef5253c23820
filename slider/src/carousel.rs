use crate::Error;
use std::mem;

/// Minimum horizontal travel, in pixels, for a released drag to change page.
pub const SWITCH_THRESHOLD: i32 = 30;
/// Duration of the eased move to a page.
pub const TRANSITION_MS: u32 = 400;

/// Client coordinates of a touch point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Fixed-duration eased move, used when settling on a page.
    Eased,
    /// No transition, so the strip follows the finger.
    Immediate,
}

impl Transition {
    pub fn as_css(&self) -> String {
        match self {
            Transition::Eased => format!("{TRANSITION_MS}ms"),
            Transition::Immediate => "none".to_string(),
        }
    }
}

/// The visual side of a slider: the container and its strip of pages.
pub trait Surface {
    /// Visible width of the container in pixels.
    fn width(&self) -> i32;
    fn page_count(&self) -> usize;
    fn page_height(&self, index: usize) -> Option<i32>;
    fn set_height(&self, height: i32);
    /// Translates the page strip horizontally.
    fn set_offset(&self, offset: i32, transition: Transition);
}

/// Starts repeating tasks. Dropping the returned handle cancels the task.
pub trait Schedule {
    type Handle;

    fn every(&self, interval_ms: u32) -> Self::Handle;
}

/// How a touch-move was interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Horizontal drag; the strip moved and default browser behaviour should be suppressed.
    Drag,
    /// Mostly vertical movement, left to the browser as a scroll.
    Scroll,
    /// No gesture in progress.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging { start: Point, start_offset: i32 },
}

/// A horizontally paged strip showing one page at a time.
///
/// Pages are switched by touch drags, by [`Slider::switch_to`] or by an optional
/// auto-advance timer. Drag and explicit switches clamp at the first and last
/// page; auto-advance wraps around to the first page.
pub struct Slider<S, T: Schedule> {
    surface: S,
    schedule: T,
    width: i32,
    count: usize,
    index: usize,
    offset: i32,
    interval: u32,
    timer: Option<T::Handle>,
    phase: Phase,
    on_change: Box<dyn FnMut(usize)>,
}

impl<S: Surface, T: Schedule> Slider<S, T> {
    /// Creates a slider resting on the first page. Width and page count are read
    /// once from the surface and never re-measured. An `interval` of zero
    /// disables auto-advance, otherwise the timer is started immediately.
    pub fn new(
        surface: S,
        schedule: T,
        interval: u32,
        on_change: Box<dyn FnMut(usize)>,
    ) -> Result<Self, Error> {
        let count = surface.page_count();
        if count == 0 {
            return Err(Error::NoPages);
        }
        let width = surface.width();
        let mut slider = Self {
            surface,
            schedule,
            width,
            count,
            index: 0,
            offset: 0,
            interval,
            timer: None,
            phase: Phase::Idle,
            on_change,
        };
        log::trace!("slider created with {count} pages of {width}px");
        slider.sync_height();
        slider.start_auto();
        Ok(slider)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn page_count(&self) -> usize {
        self.count
    }

    pub fn is_auto_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Moves to `index`, clamped to the available pages. The change callback
    /// fires even when the index is unchanged.
    pub fn switch_to(&mut self, index: isize) {
        let index = index.clamp(0, self.count as isize - 1) as usize;
        self.offset = self.rest_offset(index);
        self.surface.set_offset(self.offset, Transition::Eased);
        self.index = index;
        (self.on_change)(index);
        self.sync_height();
    }

    /// Advances one page, wrapping from the last page to the first.
    pub fn advance(&mut self) {
        let next = (self.index + 1) % self.count;
        self.switch_to(next as isize);
    }

    pub fn touch_start(&mut self, point: Point) {
        let start_offset = self.rest_offset(self.index);
        self.phase = Phase::Dragging {
            start: point,
            start_offset,
        };
        self.offset = start_offset;
        self.surface.set_offset(start_offset, Transition::Immediate);
        self.stop_auto();
    }

    pub fn touch_move(&mut self, point: Point) -> Gesture {
        let (start, start_offset) = match self.phase {
            Phase::Dragging {
                start,
                start_offset,
            } => (start, start_offset),
            Phase::Idle => return Gesture::Ignored,
        };
        let dx = point.x - start.x;
        let dy = point.y - start.y;
        if dy.abs() > dx.abs() {
            return Gesture::Scroll;
        }

        let min = self.rest_offset(self.count - 1);
        self.offset = (start_offset + dx).clamp(min, 0);
        self.surface.set_offset(self.offset, Transition::Immediate);
        Gesture::Drag
    }

    /// Resolves a drag: short drags snap back, longer ones move one page in the
    /// direction of travel.
    pub fn touch_end(&mut self, point: Point) {
        let start = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Dragging { start, .. } => start,
            Phase::Idle => return,
        };
        let dx = point.x - start.x;
        let current = self.index as isize;
        if dx.abs() < SWITCH_THRESHOLD {
            self.switch_to(current);
        } else if dx > 0 {
            self.switch_to(current - 1);
        } else {
            self.switch_to(current + 1);
        }

        if self.interval > 0 {
            self.start_auto();
        }
    }

    /// Starts auto-advance. Does nothing when disabled or already running.
    pub fn start_auto(&mut self) {
        if self.interval == 0 || self.timer.is_some() {
            return;
        }
        log::trace!("starting auto-advance every {}ms", self.interval);
        self.timer = Some(self.schedule.every(self.interval));
    }

    pub fn stop_auto(&mut self) {
        self.timer = None;
    }

    fn rest_offset(&self, index: usize) -> i32 {
        -(index as i32) * self.width
    }

    fn sync_height(&self) {
        if let Some(height) = self.surface.page_height(self.index) {
            self.surface.set_height(height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        offsets: RefCell<Vec<(i32, Transition)>>,
        heights: RefCell<Vec<i32>>,
    }

    struct FakeSurface {
        width: i32,
        heights: Vec<i32>,
        recorder: Rc<Recorder>,
    }

    impl Surface for FakeSurface {
        fn width(&self) -> i32 {
            self.width
        }

        fn page_count(&self) -> usize {
            self.heights.len()
        }

        fn page_height(&self, index: usize) -> Option<i32> {
            self.heights.get(index).copied()
        }

        fn set_height(&self, height: i32) {
            self.recorder.heights.borrow_mut().push(height)
        }

        fn set_offset(&self, offset: i32, transition: Transition) {
            self.recorder.offsets.borrow_mut().push((offset, transition))
        }
    }

    #[derive(Clone, Default)]
    struct FakeSchedule {
        started: Rc<Cell<usize>>,
        active: Rc<Cell<usize>>,
    }

    struct Ticket(Rc<Cell<usize>>);

    impl Drop for Ticket {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1)
        }
    }

    impl Schedule for FakeSchedule {
        type Handle = Ticket;

        fn every(&self, _interval_ms: u32) -> Ticket {
            self.started.set(self.started.get() + 1);
            self.active.set(self.active.get() + 1);
            Ticket(self.active.clone())
        }
    }

    struct Harness {
        slider: Slider<FakeSurface, FakeSchedule>,
        recorder: Rc<Recorder>,
        schedule: FakeSchedule,
        changes: Rc<RefCell<Vec<usize>>>,
    }

    fn harness(width: i32, heights: &[i32], interval: u32) -> Harness {
        let recorder = Rc::new(Recorder::default());
        let schedule = FakeSchedule::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let surface = FakeSurface {
            width,
            heights: heights.to_vec(),
            recorder: recorder.clone(),
        };
        let changes_clone = changes.clone();
        let slider = Slider::new(
            surface,
            schedule.clone(),
            interval,
            Box::new(move |index| changes_clone.borrow_mut().push(index)),
        )
        .expect("could not create slider");
        Harness {
            slider,
            recorder,
            schedule,
            changes,
        }
    }

    fn drag(slider: &mut Slider<FakeSurface, FakeSchedule>, from: i32, to: i32) {
        slider.touch_start(Point::new(from, 200));
        slider.touch_move(Point::new(to, 200));
        slider.touch_end(Point::new(to, 200));
    }

    #[test]
    fn rejects_empty_container() {
        let surface = FakeSurface {
            width: 300,
            heights: vec![],
            recorder: Rc::new(Recorder::default()),
        };
        let result = Slider::new(surface, FakeSchedule::default(), 0, Box::new(|_| {}));
        assert!(matches!(result, Err(Error::NoPages)));
    }

    #[test]
    fn syncs_height_on_creation() {
        let h = harness(300, &[120, 80], 0);
        assert_eq!(*h.recorder.heights.borrow(), vec![120]);
        assert_eq!(h.slider.index(), 0);
        assert_eq!(h.slider.offset(), 0);
        assert!(h.changes.borrow().is_empty());
    }

    #[test]
    fn clamps_switch_index() {
        let mut h = harness(250, &[10, 20, 30, 40], 0);
        h.slider.switch_to(-5);
        assert_eq!(h.slider.index(), 0);
        assert_eq!(h.slider.offset(), 0);

        h.slider.switch_to(99);
        assert_eq!(h.slider.index(), 3);
        assert_eq!(h.slider.offset(), -750);
        assert_eq!(*h.changes.borrow(), vec![0, 3]);
    }

    #[test]
    fn switch_uses_eased_transition_and_resyncs_height() {
        let mut h = harness(300, &[10, 20, 30], 0);
        h.slider.switch_to(2);
        assert_eq!(
            h.recorder.offsets.borrow().last(),
            Some(&(-600, Transition::Eased))
        );
        assert_eq!(h.recorder.heights.borrow().last(), Some(&30));
    }

    #[test]
    fn switch_to_current_still_notifies() {
        let mut h = harness(300, &[10, 20, 30], 0);
        h.slider.switch_to(1);
        h.slider.switch_to(1);
        assert_eq!(*h.changes.borrow(), vec![1, 1]);
        assert_eq!(*h.recorder.heights.borrow(), vec![10, 20, 20]);
    }

    #[test]
    fn offset_matches_index_at_rest() {
        let mut h = harness(320, &[1, 2, 3, 4, 5], 0);
        for target in [3, 1, 4, 0, 2] {
            h.slider.switch_to(target);
            assert_eq!(h.slider.offset(), -(h.slider.index() as i32) * 320);
        }
        drag(&mut h.slider, 200, 100);
        assert_eq!(h.slider.offset(), -(h.slider.index() as i32) * 320);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.switch_to(1);
        drag(&mut h.slider, 100, 129);
        assert_eq!(h.slider.index(), 1);
        drag(&mut h.slider, 100, 71);
        assert_eq!(h.slider.index(), 1);
        assert_eq!(*h.changes.borrow(), vec![1, 1, 1]);
    }

    #[test]
    fn threshold_drag_switches_page() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.switch_to(1);
        drag(&mut h.slider, 100, 130);
        assert_eq!(h.slider.index(), 0);
        drag(&mut h.slider, 100, 70);
        assert_eq!(h.slider.index(), 1);
    }

    #[test]
    fn drag_right_on_first_page_stays_clamped() {
        let mut h = harness(300, &[1, 2, 3, 4, 5], 0);
        drag(&mut h.slider, 50, 250);
        assert_eq!(h.slider.index(), 0);
        assert_eq!(h.slider.offset(), 0);
    }

    #[test]
    fn drag_left_on_last_page_stays_clamped() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.switch_to(2);
        drag(&mut h.slider, 250, 50);
        assert_eq!(h.slider.index(), 2);
        assert_eq!(h.slider.offset(), -600);
    }

    #[test]
    fn horizontal_move_tracks_finger() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.touch_start(Point::new(100, 100));
        assert!(h.slider.is_dragging());
        assert_eq!(h.slider.touch_move(Point::new(90, 105)), Gesture::Drag);
        assert_eq!(
            h.recorder.offsets.borrow().last(),
            Some(&(-10, Transition::Immediate))
        );
    }

    #[test]
    fn vertical_move_is_left_to_the_browser() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.touch_start(Point::new(100, 100));
        let before = h.recorder.offsets.borrow().len();
        assert_eq!(h.slider.touch_move(Point::new(95, 110)), Gesture::Scroll);
        assert_eq!(h.recorder.offsets.borrow().len(), before);
        assert_eq!(h.slider.offset(), 0);
    }

    #[test]
    fn move_offset_is_clamped_to_strip() {
        let mut h = harness(300, &[1, 2, 3], 0);
        h.slider.touch_start(Point::new(100, 100));
        h.slider.touch_move(Point::new(400, 100));
        assert_eq!(h.slider.offset(), 0);
        h.slider.touch_move(Point::new(-900, 100));
        assert_eq!(h.slider.offset(), -600);
    }

    #[test]
    fn touches_without_start_are_ignored() {
        let mut h = harness(300, &[1, 2, 3], 0);
        assert_eq!(h.slider.touch_move(Point::new(10, 10)), Gesture::Ignored);
        h.slider.touch_end(Point::new(-200, 10));
        assert_eq!(h.slider.index(), 0);
        assert!(h.changes.borrow().is_empty());
    }

    #[test]
    fn drag_end_to_end() {
        let mut h = harness(300, &[100, 140, 90], 0);
        h.slider.touch_start(Point::new(100, 50));
        h.slider.touch_move(Point::new(50, 50));
        h.slider.touch_end(Point::new(50, 50));
        assert_eq!(*h.changes.borrow(), vec![1]);
        assert_eq!(h.slider.offset(), -300);
        assert_eq!(h.recorder.heights.borrow().last(), Some(&140));
        assert!(!h.slider.is_dragging());
    }

    #[test]
    fn auto_advance_wraps() {
        let mut h = harness(300, &[1, 2, 3, 4, 5], 3000);
        h.slider.switch_to(4);
        h.slider.advance();
        assert_eq!(h.slider.index(), 0);
    }

    #[test]
    fn starts_single_timer() {
        let mut h = harness(300, &[1, 2], 3000);
        assert!(h.slider.is_auto_running());
        h.slider.start_auto();
        h.slider.start_auto();
        assert_eq!(h.schedule.started.get(), 1);
        assert_eq!(h.schedule.active.get(), 1);
    }

    #[test]
    fn zero_interval_never_schedules() {
        let mut h = harness(300, &[1, 2], 0);
        h.slider.start_auto();
        drag(&mut h.slider, 100, 10);
        assert!(!h.slider.is_auto_running());
        assert_eq!(h.schedule.started.get(), 0);
    }

    #[test]
    fn stop_is_safe_when_idle() {
        let mut h = harness(300, &[1, 2], 0);
        h.slider.stop_auto();
        h.slider.stop_auto();
        assert_eq!(h.schedule.active.get(), 0);
    }

    #[test]
    fn drag_pauses_and_restarts_timer() {
        let mut h = harness(300, &[1, 2, 3], 3000);
        h.slider.touch_start(Point::new(100, 100));
        assert!(!h.slider.is_auto_running());
        assert_eq!(h.schedule.active.get(), 0);
        h.slider.touch_end(Point::new(20, 100));
        assert!(h.slider.is_auto_running());
        assert_eq!(h.schedule.started.get(), 2);
        assert_eq!(h.schedule.active.get(), 1);
    }

    #[test]
    fn dropping_slider_cancels_timer() {
        let h = harness(300, &[1, 2], 1000);
        let active = h.schedule.active.clone();
        assert_eq!(active.get(), 1);
        drop(h);
        assert_eq!(active.get(), 0);
    }

    #[test]
    fn transition_css() {
        assert_eq!(Transition::Eased.as_css(), "400ms");
        assert_eq!(Transition::Immediate.as_css(), "none");
    }
}
