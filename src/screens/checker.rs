//! Symptom checker screen
//!
//! Two-stage selection: pick a body region, then toggle its symptoms.
//! Selections accumulate across region changes, so a user can collect
//! symptoms from several regions before resolving. Backing out to the
//! dashboard discards the in-progress selection.

use crate::catalog;
use crate::errors::Result;
use crate::screens::{Display, InputHandler, Screen, Transition};
use crate::session::Session;

/// Parsed input for the region-list stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionChoice {
    /// 0-based index into [`catalog::BODY_REGIONS`].
    Pick(usize),
    Back,
    Quit,
    Invalid,
}

/// Parsed input for the symptom-toggle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymptomChoice {
    /// 0-based index into the current region's symptom list.
    Toggle(usize),
    Next,
    Back,
    Quit,
    Invalid,
}

/// Parse a region-stage choice: a 1-based region number or `back`.
pub fn parse_region_choice(input: &str) -> RegionChoice {
    match input.trim().to_lowercase().as_str() {
        "back" | "b" => RegionChoice::Back,
        "quit" | "exit" | "q" => RegionChoice::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=catalog::BODY_REGIONS.len()).contains(&n) => RegionChoice::Pick(n - 1),
            _ => RegionChoice::Invalid,
        },
    }
}

/// Parse a symptom-stage choice for a region with `count` symptoms.
pub fn parse_symptom_choice(input: &str, count: usize) -> SymptomChoice {
    match input.trim().to_lowercase().as_str() {
        "next" | "n" => SymptomChoice::Next,
        "back" | "b" => SymptomChoice::Back,
        "quit" | "exit" | "q" => SymptomChoice::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => SymptomChoice::Toggle(n - 1),
            _ => SymptomChoice::Invalid,
        },
    }
}

pub fn run(
    display: &Display,
    input: &mut InputHandler,
    session: &mut Session,
) -> Result<Transition> {
    let mut current_region: Option<&'static str> = None;

    loop {
        match current_region {
            None => {
                display.show_section("Symptom Checker");
                display.show_hint("Select a body part:");
                for (index, region) in catalog::BODY_REGIONS.iter().enumerate() {
                    display.show_numbered(index + 1, region);
                }
                if !session.selected_symptoms().is_empty() {
                    display.show_hint(&format!(
                        "Selected so far: {}",
                        session.selected_symptoms().join(", ")
                    ));
                }
                display.show_hint("Commands: <number>, next, back");

                match input.read_line("> ")? {
                    None => return Ok(Transition::Quit),
                    // "next" is accepted here too so a multi-region
                    // selection can resolve without re-entering a region.
                    Some(line) if parse_symptom_choice(&line, 0) == SymptomChoice::Next => {
                        return Ok(Transition::To(Screen::PossibleDiagnoses));
                    }
                    Some(line) => match parse_region_choice(&line) {
                        RegionChoice::Pick(index) => {
                            current_region = catalog::region_by_index(index);
                        }
                        RegionChoice::Back => {
                            // Leaving the checker discards the draft selection.
                            session.clear_selection();
                            return Ok(Transition::To(Screen::Dashboard));
                        }
                        RegionChoice::Quit => return Ok(Transition::Quit),
                        RegionChoice::Invalid => {
                            display.show_warning(&format!(
                                "Pick a body part between 1 and {}.",
                                catalog::BODY_REGIONS.len()
                            ));
                        }
                    },
                }
            }
            Some(region) => {
                let symptoms = catalog::symptoms_for(region);

                display.show_section(&format!("Symptoms: {}", region));
                for (index, symptom) in symptoms.iter().enumerate() {
                    let marker = if session.is_selected(symptom) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    display.show_numbered(index + 1, &format!("{} {}", marker, symptom));
                }
                display.show_hint("Commands: <number> to toggle, next, back");

                match input.read_line("> ")? {
                    None => return Ok(Transition::Quit),
                    Some(line) => match parse_symptom_choice(&line, symptoms.len()) {
                        SymptomChoice::Toggle(index) => {
                            session.toggle_symptom(symptoms[index]);
                        }
                        SymptomChoice::Next => {
                            return Ok(Transition::To(Screen::PossibleDiagnoses));
                        }
                        SymptomChoice::Back => current_region = None,
                        SymptomChoice::Quit => return Ok(Transition::Quit),
                        SymptomChoice::Invalid => {
                            display.show_warning(&format!(
                                "Toggle a symptom between 1 and {}.",
                                symptoms.len()
                            ));
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_region_choice() {
        assert_eq!(parse_region_choice("1"), RegionChoice::Pick(0));
        assert_eq!(parse_region_choice("23"), RegionChoice::Pick(22));
        assert_eq!(parse_region_choice("back"), RegionChoice::Back);
        assert_eq!(parse_region_choice("q"), RegionChoice::Quit);
    }

    #[test]
    fn test_parse_region_choice_out_of_range() {
        assert_eq!(parse_region_choice("0"), RegionChoice::Invalid);
        assert_eq!(parse_region_choice("24"), RegionChoice::Invalid);
        assert_eq!(parse_region_choice("chest"), RegionChoice::Invalid);
    }

    #[test]
    fn test_parse_symptom_choice() {
        assert_eq!(parse_symptom_choice("3", 8), SymptomChoice::Toggle(2));
        assert_eq!(parse_symptom_choice("next", 8), SymptomChoice::Next);
        assert_eq!(parse_symptom_choice("n", 8), SymptomChoice::Next);
        assert_eq!(parse_symptom_choice("back", 8), SymptomChoice::Back);
    }

    #[test]
    fn test_parse_symptom_choice_bounds() {
        assert_eq!(parse_symptom_choice("0", 8), SymptomChoice::Invalid);
        assert_eq!(parse_symptom_choice("9", 8), SymptomChoice::Invalid);
        // A numeric toggle is never valid with no symptoms listed.
        assert_eq!(parse_symptom_choice("1", 0), SymptomChoice::Invalid);
    }
}
