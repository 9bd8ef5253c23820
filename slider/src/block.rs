use crate::{find, ElementList, Error, SliderHandle};
use gloo_console::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

pub const ACTIVE: &str = "active";

/// Wires a block container: the `.slider-container` pages and the `.block-menu`
/// controls, where control `i` jumps to page `i` and carries the active marker
/// while page `i` is shown.
pub fn bind_block(container: &Element) -> Result<SliderHandle, Error> {
    let pages = html(find(container, ".slider-container")?)?;
    let menu = find(container, ".block-menu")?;

    let menu_clone = menu.clone();
    let slider = SliderHandle::new(pages, 0, move |index| {
        if let Ok(Some(active)) = menu_clone.query_selector(&format!(".{ACTIVE}")) {
            if let Err(e) = active.class_list().remove_1(ACTIVE) {
                error!(format!("unable to remove active class from menu: {:?}", e))
            }
        }
        if let Some(control) = menu_clone.children().item(index as u32) {
            if let Err(e) = control.class_list().add_1(ACTIVE) {
                error!(format!("unable to add active class to menu: {:?}", e))
            }
        }
    })?;

    for (index, control) in menu.children().to_list::<Element>().iter().enumerate() {
        let slider = slider.clone();
        let listener = Closure::wrap(Box::new(move |_event: JsValue| {
            slider.switch_to(index as isize);
        }) as Box<dyn Fn(JsValue)>);
        if let Err(e) =
            control.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        {
            error!(format!(
                "unable to add click event listener to menu control: {:?}",
                e
            ))
        }
        listener.forget();
    }

    Ok(slider)
}

/// Wires an auto-advancing banner, keeping the dot at the shown page marked.
pub fn bind_banner(
    container: &Element,
    dots: Element,
    interval: u32,
) -> Result<SliderHandle, Error> {
    SliderHandle::new(html(container.clone())?, interval, move |index| {
        if let Ok(Some(active)) = dots.query_selector(&format!(".{ACTIVE}")) {
            active.set_class_name("");
        }
        if let Some(dot) = dots.children().item(index as u32) {
            dot.set_class_name(ACTIVE);
        }
    })
}

fn html(element: Element) -> Result<HtmlElement, Error> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|element| Error::Dom(format!("{} is not an html element", element.tag_name())))
}
