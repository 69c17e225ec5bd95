use crate::constants::{
    ACTIVE_CLASS, BACK_BUTTON_ID, MENU_CONTAINER_ID, PLAYER_ICON_ID, TOGGLE_BUTTON_ID,
};
use crate::core::{MenuClick, MenuState};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct MenuElements {
    toggle: web::Element,
    panel: web::Element,
    icon: Option<web::HtmlElement>,
    back_button: Option<web::HtmlElement>,
}

impl MenuElements {
    fn lookup(document: &web::Document) -> Option<Self> {
        Some(Self {
            toggle: document.get_element_by_id(TOGGLE_BUTTON_ID)?,
            panel: document.get_element_by_id(MENU_CONTAINER_ID)?,
            icon: dom::html_element_by_id(document, PLAYER_ICON_ID),
            back_button: dom::html_element_by_id(document, BACK_BUTTON_ID),
        })
    }

    fn state(&self) -> MenuState {
        MenuState::from_active(self.toggle.class_list().contains(ACTIVE_CLASS))
    }

    /// Write `state` to the class list and every mirrored style property.
    fn apply(&self, state: MenuState) {
        _ = self
            .toggle
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, state.is_open());
        let layout = state.layout();
        if let Some(panel) = self.panel.dyn_ref::<web::HtmlElement>() {
            dom::set_style(panel, "left", layout.panel_left);
        }
        if let Some(icon) = &self.icon {
            dom::set_style(icon, "display", layout.icon_display);
        }
        if let Some(back) = &self.back_button {
            dom::set_style(back, "left", layout.back_button_left);
        }
    }

    fn classify(&self, target: Option<&web::EventTarget>) -> MenuClick {
        MenuClick::classify(
            dom::contains_target(&self.toggle, target),
            dom::contains_target(&self.panel, target),
        )
    }
}

/// Toggle on button click; close on any click outside the panel and button.
pub fn wire_menu(document: &web::Document) {
    let Some(els) = MenuElements::lookup(document) else {
        log::warn!("[menu] toggle button or menu container missing; menu disabled");
        return;
    };

    {
        let els = els.clone();
        dom::add_click_listener(document, TOGGLE_BUTTON_ID, move || {
            let next = els.state().next(MenuClick::Toggle);
            els.apply(next);
            log::debug!("[menu] {:?}", next);
        });
    }

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target();
        let click = els.classify(target.as_ref());
        if click == MenuClick::Outside {
            els.apply(els.state().next(click));
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
