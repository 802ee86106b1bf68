use facultyjobs::pkg::client::{
    router::{Outcome, ToastKind},
    state::AppState,
    uispec::{HomeView, JobCard, JobDetails, OpenSection},
};

pub fn home(service_name: &str, view: &HomeView) {
    println!("{}", service_name);
    if !view.search.is_empty() {
        println!("search: {}", view.search);
    }
    let active: Vec<&str> = view
        .department_chips
        .iter()
        .chain(view.level_chips.iter())
        .filter(|chip| chip.active)
        .map(|chip| chip.label)
        .collect();
    if !active.is_empty() {
        println!("filters: {}", active.join(", "));
    }
    println!("\nOpen positions");
    for line in open_section(view) {
        println!("  {}", line);
    }
    if !view.closing_soon.is_empty() {
        println!("\nClosing soon");
        for card in &view.closing_soon {
            println!("  {}", card_line(card));
        }
    }
    if !view.archived.is_empty() {
        println!("\nArchived");
        for card in &view.archived {
            println!("  {}", card_line(card));
        }
    }
}

pub fn details(details: &JobDetails) {
    println!("{}", details.title);
    println!("{} • {}", details.institution, details.location);
    println!("Departments: {}", details.departments.join(", "));
    println!("Levels: {}", details.levels.join(", "));
    println!("Deadline: {}", details.deadline);
    println!("\n{}\n", details.description);
    println!("Apply: {}", details.apply_url);
    println!("Share: {}", details.share_url);
    if details.saved {
        println!("Saved");
    }
}

pub fn whoami(state: &AppState) {
    match state.session.identity() {
        Some(identity) => {
            println!("{} <{}> ({})", identity.display_name, identity.email, identity.role);
            if !identity.verified_email {
                println!("email not verified");
            }
        }
        None => println!("not signed in"),
    }
    let capabilities: Vec<String> = state.capabilities().iter().map(|c| c.to_string()).collect();
    println!("can: {}", capabilities.join(", "));
}

pub fn outcome(outcome: &Outcome) {
    for toast in &outcome.toasts {
        let tag = match toast.kind {
            ToastKind::Success => "ok",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        };
        println!("[{}] {}", tag, toast.message);
    }
    if let Some(url) = &outcome.open_url {
        println!("Open: {}", url);
    }
}

fn card_line(card: &JobCard) -> String {
    format!(
        "[{}] {}{}\n    {}\n    deadline {} · {}",
        card.id,
        card.title,
        if card.approved { " (Approved)" } else { "" },
        card.subtitle,
        card.deadline,
        card.save_label()
    )
}

fn open_section(view: &HomeView) -> Vec<String> {
    match &view.open {
        OpenSection::Loading => vec!["Loading...".to_string()],
        OpenSection::Empty { message } => vec![message.to_string()],
        OpenSection::Listed(cards) => cards.iter().map(card_line).collect(),
    }
}
