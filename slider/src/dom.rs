//! Binds a [`Slider`] to a live container element.

use crate::carousel::{Gesture, Point, Schedule, Slider, Surface, Transition};
use crate::{ElementList, Error};
use gloo_console::error;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, Touch, TouchEvent};

pub type DomSlider = Slider<DomSurface, IntervalSchedule>;

/// A container whose direct children are the pages. The first child carries the
/// horizontal offset, pushing the remaining pages along with it.
pub struct DomSurface {
    container: HtmlElement,
    pages: Vec<HtmlElement>,
    width: i32,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Result<Self, Error> {
        let children = container.children();
        let pages: Vec<HtmlElement> = children.to_list();
        check_pages(children.length(), pages.len())?;
        Ok(Self {
            width: container.client_width(),
            container,
            pages,
        })
    }

    fn style(element: &HtmlElement, property: &str, value: &str) {
        if let Err(e) = element.style().set_property(property, value) {
            error!(format!("unable to set {property} on slider: {:?}", e))
        }
    }
}

impl Surface for DomSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_height(&self, index: usize) -> Option<i32> {
        self.pages.get(index).map(|page| page.offset_height())
    }

    fn set_height(&self, height: i32) {
        Self::style(&self.container, "height", &format!("{height}px"))
    }

    fn set_offset(&self, offset: i32, transition: Transition) {
        if let Some(strip) = self.pages.first() {
            Self::style(strip, "transition", &transition.as_css());
            Self::style(strip, "margin-left", &format!("{offset}px"));
        }
    }
}

/// Auto-advance backed by `setInterval`. The task only holds a weak reference
/// to the slider it advances.
#[derive(Clone, Default)]
pub struct IntervalSchedule {
    target: Rc<RefCell<Weak<RefCell<DomSlider>>>>,
}

impl IntervalSchedule {
    fn attach(&self, slider: &Rc<RefCell<DomSlider>>) {
        *self.target.borrow_mut() = Rc::downgrade(slider);
    }
}

impl Schedule for IntervalSchedule {
    type Handle = Interval;

    fn every(&self, interval_ms: u32) -> Interval {
        let target = self.target.clone();
        Interval::new(interval_ms, move || {
            let slider = target.borrow().upgrade();
            if let Some(slider) = slider {
                match slider.try_borrow_mut() {
                    Ok(mut slider) => slider.advance(),
                    Err(_) => log::warn!("slider busy, skipping auto-advance"),
                }
            }
        })
    }
}

/// Shared handle to a slider living on the page.
#[derive(Clone)]
pub struct SliderHandle {
    slider: Rc<RefCell<DomSlider>>,
}

impl SliderHandle {
    /// Creates a slider over `container` and listens for touches on it. An
    /// `interval` of zero disables auto-advance.
    pub fn new<F>(container: HtmlElement, interval: u32, on_change: F) -> Result<Self, Error>
    where
        F: FnMut(usize) + 'static,
    {
        let surface = DomSurface::new(container.clone())?;
        let schedule = IntervalSchedule::default();
        let slider = Slider::new(surface, schedule.clone(), interval, Box::new(on_change))?;
        let slider = Rc::new(RefCell::new(slider));
        schedule.attach(&slider);

        let handle = Self { slider };
        handle.listen(&container);
        Ok(handle)
    }

    pub fn switch_to(&self, index: isize) {
        self.slider.borrow_mut().switch_to(index)
    }

    fn listen(&self, container: &HtmlElement) {
        let slider = self.slider.clone();
        add_touch_listener(container, "touchstart", true, move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                slider.borrow_mut().touch_start(point(&touch));
            }
        });

        // Non-passive, otherwise the browser ignores prevent_default
        let slider = self.slider.clone();
        add_touch_listener(container, "touchmove", false, move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                let gesture = slider.borrow_mut().touch_move(point(&touch));
                if gesture == Gesture::Drag {
                    e.prevent_default();
                }
            }
        });

        let slider = self.slider.clone();
        add_touch_listener(container, "touchend", true, move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                slider.borrow_mut().touch_end(point(&touch));
            }
        });
    }
}

/// Every direct child must be an html page, so that page `i` stays aligned with
/// child `i` of a companion menu.
fn check_pages(children: u32, pages: usize) -> Result<(), Error> {
    if children == 0 {
        return Err(Error::NoPages);
    }
    if pages != children as usize {
        return Err(Error::Dom(format!(
            "only {pages} of {children} slider children are html elements"
        )));
    }
    Ok(())
}

fn point(touch: &Touch) -> Point {
    Point::new(touch.client_x(), touch.client_y())
}

fn add_touch_listener<F>(container: &HtmlElement, event: &str, passive: bool, handler: F)
where
    F: Fn(TouchEvent) + 'static,
{
    let listener = Closure::wrap(Box::new(handler) as Box<dyn Fn(TouchEvent)>);
    let mut options = AddEventListenerOptions::new();
    options.set_passive(passive);
    if let Err(e) = container.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        listener.as_ref().unchecked_ref(),
        &options,
    ) {
        error!(format!(
            "unable to add {event} event listener to slider: {:?}",
            e
        ))
    }
    listener.forget();
}
