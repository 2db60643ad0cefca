//! Find Healthcare screen
//!
//! Presents map links for locating nearby facilities, centered on the
//! configured default coordinate. The map itself is an external service;
//! nothing is fetched here.

use crate::config::Config;
use crate::errors::Result;
use crate::map::MapView;
use crate::screens::{Display, InputHandler, Screen, Transition};

pub fn run(display: &Display, input: &mut InputHandler, config: &Config) -> Result<Transition> {
    display.show_section("Find Healthcare");

    let view = MapView::from_config(&config.map);
    display.show_info("Open one of these in your browser:");
    display.show_bullet(&format!("Map view:  {}", view.url()));
    display.show_bullet(&format!("Hospitals: {}", view.hospital_search_url()));

    display.show_hint("\nPress Enter to go back.");
    match input.read_line("> ")? {
        None => Ok(Transition::Quit),
        Some(_) => Ok(Transition::To(Screen::Dashboard)),
    }
}
