use crate::constants::LOADING_SCREEN_ID;
use crate::dom;
use web_sys as web;

#[inline]
pub fn show_loading(document: &web::Document) {
    dom::set_style_by_id(document, LOADING_SCREEN_ID, "display", "flex");
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    dom::set_style_by_id(document, LOADING_SCREEN_ID, "display", "none");
}
