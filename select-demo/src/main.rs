use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use custom_select::{Form, Page, SelectControl, StyleVars, Submission};
use pagedom::{ColorContext, DomEvent, Edges, Element, Event, FocusState, Key, Size, Style, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Lines shown under the controls.
#[derive(Debug, Default)]
struct Status {
    last_change: String,
    last_action: String,
}

fn main() {
    match File::create("select-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file: {}", e),
    }

    let vars = parse_style_args(std::env::args().skip(1));

    if let Err(e) = run(vars) {
        eprintln!("Error: {}", e);
    }
}

/// Apply `--name=value` arguments as style variable overrides.
fn parse_style_args(args: impl Iterator<Item = String>) -> StyleVars {
    let mut vars = StyleVars::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            eprintln!("Ignoring '{}': expected --name=value", arg);
            continue;
        };
        if let Err(e) = vars.set(name, value) {
            eprintln!("Ignoring '{}': {}", arg, e);
        }
    }
    vars
}

fn option(value: &str, label: &str) -> Element {
    Element::new("option").attr("value", value).inner_text(label)
}

fn build_page() -> (Page, Form, Vec<SelectControl>) {
    let page = Page::new();
    let form = Form::new("order");

    let fruit = SelectControl::new(
        Element::new(custom_select::TAG)
            .id("fruit")
            .attr("name", "fruit")
            .child(option("apple", "Apple"))
            .child(option("banana", "Banana").attr("selected", ""))
            .child(option("cherry", "Cherry"))
            .child(option("damson", "Damson"))
            .child(option("elderberry", "Elderberry"))
            .child(option("fig", "Fig")),
    );
    let size = SelectControl::new(
        Element::new(custom_select::TAG)
            .id("size")
            .attr("name", "size")
            .attr("placeholder", "Pick a size")
            .attr("required", "")
            .child(option("s", "Small"))
            .child(option("m", "Medium"))
            .child(option("l", "Large")),
    );

    let controls = vec![fruit, size];
    for control in &controls {
        form.associate(control);
        page.connect(control);
    }
    (page, form, controls)
}

fn view(controls: &[SelectControl], vars: &StyleVars, status: &Status, form: &Form) -> Element {
    let data = form.data().to_urlencoded();
    Element::col()
        .id("root")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .gap(1)
        .child(Element::text("custom-select demo").style(Style::new().bold()))
        .children(
            controls
                .iter()
                .map(|control| control.presentation(vars).width(Size::Fixed(32))),
        )
        .child(Element::text(format!("change: {}", status.last_change)))
        .child(Element::text(format!("form:   {}", data)))
        .child(Element::text(status.last_action.clone()))
        .child(
            Element::text("click to choose, s submit, r reset, q quit")
                .style(Style::new().dim()),
        )
}

fn run(vars: StyleVars) -> io::Result<()> {
    let (page, form, controls) = build_page();
    let status = Arc::new(Mutex::new(Status::default()));

    {
        let status = Arc::clone(&status);
        page.add_event_listener("change", move |event: &mut DomEvent| {
            if let Ok(mut status) = status.lock() {
                status.last_change = format!(
                    "{} = {}",
                    event.target().unwrap_or("?"),
                    event.detail().unwrap_or("(none)")
                );
            }
        });
    }

    let mut terminal = Terminal::new()?;
    let mut focus = FocusState::new();

    loop {
        let root = {
            let status = status.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            view(&controls, &vars, &status, &form)
        };
        let layout = terminal.render(&root, &ColorContext::new(&vars))?.clone();

        let raw = terminal.poll(Some(Duration::from_millis(250)))?;
        for event in focus.process_events(&raw, &root, &layout) {
            let action = match event {
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('s'),
                    ..
                } => Some(match form.request_submit() {
                    Submission::Submitted(data) => format!("submitted {}", data.to_urlencoded()),
                    Submission::Blocked { invalid } => {
                        format!("blocked: {} (select an item)", invalid.join(", "))
                    }
                    Submission::Cancelled => "submit cancelled".to_string(),
                }),
                Event::Key {
                    key: Key::Char('r'),
                    ..
                } => {
                    form.reset();
                    Some("form reset".to_string())
                }
                Event::Click { x, y, .. } => {
                    let outcome = page.click_at(x, y, &layout, &root);
                    log::debug!("click at {x},{y}: {:?}", outcome);
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                if let Ok(mut status) = status.lock() {
                    status.last_action = action;
                }
            }
        }
    }
}
