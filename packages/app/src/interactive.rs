#![allow(clippy::module_name_repetitions)]

//! Interactive TUI for the map session.
//!
//! Drives the loaded session through the same UI events the map surface
//! would emit, using a `dialoguer` menu instead of DOM controls.

use dialoguer::{Input, Select};
use incident_map_interaction::{MarkerFilter, UiEvent, year};
use incident_map_session::{MapSession, SessionConfig};

/// Actions available in the session menu.
enum SessionAction {
    Search,
    SelectYear,
    MarkerFilter,
    ZoomIn,
    ResetZoom,
    Status,
    Quit,
}

impl SessionAction {
    const ALL: &[Self] = &[
        Self::Search,
        Self::SelectYear,
        Self::MarkerFilter,
        Self::ZoomIn,
        Self::ResetZoom,
        Self::Status,
        Self::Quit,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Search => "Search by state or county",
            Self::SelectYear => "Select a year",
            Self::MarkerFilter => "Toggle victim markers",
            Self::ZoomIn => "Zoom in (double-click)",
            Self::ResetZoom => "Reset zoom",
            Self::Status => "Show map status",
            Self::Quit => "Quit",
        }
    }
}

/// Runs the session menu loop until the user quits.
///
/// # Errors
///
/// Returns an error if a prompt fails.
pub fn run(mut session: MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let labels: Vec<&str> = SessionAction::ALL.iter().map(SessionAction::label).collect();

    loop {
        let idx = Select::new()
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;

        match SessionAction::ALL[idx] {
            SessionAction::Search => search(&mut session)?,
            SessionAction::SelectYear => select_year(&mut session)?,
            SessionAction::MarkerFilter => marker_filter(&mut session)?,
            SessionAction::ZoomIn => zoom_in(&mut session),
            SessionAction::ResetZoom => {
                session.handle(UiEvent::ZoomReset);
                println!("Zoom reset.");
            }
            SessionAction::Status => status(&session),
            SessionAction::Quit => return Ok(()),
        }
    }
}

fn search(session: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let query: String = Input::new()
        .with_prompt("Search")
        .allow_empty(true)
        .interact_text()?;

    session.handle(UiEvent::SearchSubmitted(query));

    let visible = session.visible_shape_names();
    println!("{} shapes visible", visible.len());
    for name in visible.iter().take(10) {
        println!("  {name}");
    }
    if visible.len() > 10 {
        println!("  ... and {} more", visible.len() - 10);
    }

    Ok(())
}

fn select_year(session: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    let mut items = vec!["All".to_owned()];
    items.extend((year::ALL_YEARS_SENTINEL + 1..=year::YEAR_MAX).map(|y| y.to_string()));

    let idx = Select::new()
        .with_prompt("Year")
        .items(&items)
        .default(0)
        .interact()?;

    let value = if idx == 0 {
        year::ALL_YEARS_SENTINEL
    } else {
        year::ALL_YEARS_SENTINEL + u16::try_from(idx)?
    };

    session.handle(UiEvent::YearSelected(value));
    println!("Year set to {}", session.state.year_readout);

    Ok(())
}

fn marker_filter(session: &mut MapSession) -> Result<(), Box<dyn std::error::Error>> {
    const FILTERS: &[(MarkerFilter, &str)] = &[
        (MarkerFilter::Fatal, "Fatal (circles only)"),
        (MarkerFilter::NonFatal, "Non-fatal (triangles only)"),
        (MarkerFilter::Both, "Both"),
    ];

    let labels: Vec<&str> = FILTERS.iter().map(|(_, label)| *label).collect();
    let idx = Select::new()
        .with_prompt("Markers")
        .items(&labels)
        .default(2)
        .interact()?;

    session.handle(UiEvent::MarkerFilterSet(FILTERS[idx].0));

    let (circles, triangles) = session.visible_marker_counts();
    println!("{circles} fatality markers, {triangles} injury markers visible");

    Ok(())
}

fn zoom_in(session: &mut MapSession) {
    let center = [
        SessionConfig::DEFAULT_VIEWPORT.0 / 2.0,
        SessionConfig::DEFAULT_VIEWPORT.1 / 2.0,
    ];

    if let Some(command) = session.handle(UiEvent::DoubleClick(center)) {
        println!(
            "Zoomed to {:.1}x over {}ms",
            command.target.k,
            command.duration.as_millis()
        );
    }
}

fn status(session: &MapSession) {
    let (circles, triangles) = session.visible_marker_counts();
    let active = session
        .state
        .labels
        .active_label()
        .map_or("none", |label| label.text.as_str());

    println!("Year:            {} (label: {active})", session.state.year_readout);
    println!("Zoom:            {}", session.state.zoom.to_attribute());
    println!("Marker filter:   {}", session.state.marker_filter);
    println!("Visible shapes:  {}", session.visible_shape_names().len());
    println!("Visible markers: {circles} circles, {triangles} triangles");
}
