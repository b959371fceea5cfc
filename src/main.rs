//! Terminal shell for the student portal client.
//!
//! Wires the entry screen, navigation guard, and dashboard panels to stdin
//! prompts and stdout rendering. All screen logic lives in the library.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use gundar_portal::dashboard::Dashboard;
use gundar_portal::entry::{EntryScreen, Field};
use gundar_portal::gateway::PortalClient;
use gundar_portal::guard::{self, Screen};
use gundar_portal::state::{self, AppState};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let base_url = state::resolve_base_url();
    log::info!("Portal API base URL: {}", base_url);

    let client = match PortalClient::new(&base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Invalid API base URL {}: {}", base_url, e);
            std::process::exit(1);
        }
    };

    let session_path = session_path_or_fallback();
    let state = AppState::new();

    let mut entry = EntryScreen::new();
    if !entry.mount(&state, state::load_session(&session_path)) {
        println!("Data Gundar");
        println!("Mengambil daftar fakultas...");
        entry.faculties_loaded(client.fetch_faculties().await);
        run_entry_form(&state, &mut entry, &session_path);
    }

    // The guard re-evaluates the identity on every navigation attempt.
    match guard::resolve("/dashboard", &state.identity()) {
        Screen::Dashboard => run_dashboard(&client, &state).await,
        Screen::Entry => {
            log::warn!("Identity incomplete after entry screen; exiting");
        }
    }
}

fn session_path_or_fallback() -> PathBuf {
    match state::session_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("{}. Falling back to temp dir.", e);
            std::env::temp_dir().join("gundar-portal-session.json")
        }
    }
}

/// Prompt-driven identity form. Loops until a submission with all three
/// fields non-empty succeeds.
fn run_entry_form(state: &AppState, entry: &mut EntryScreen, session_path: &std::path::Path) {
    loop {
        let name = prompt("Nama: ");
        entry.edit(state, Field::Name, &name);
        print_message(&entry.info.name);

        let class = prompt("Kelas: ");
        entry.edit(state, Field::Class, &class);
        print_message(&entry.info.class);

        let major = prompt_major(entry);
        entry.edit(state, Field::Major, &major);
        print_message(&entry.info.major);

        if entry.submit(state, session_path) {
            return;
        }
        println!("Semua field harus diisi.");
    }
}

/// Major picker: faculty names as group headers, majors numbered beneath.
/// Accepts a number or free text; free text is taken verbatim.
fn prompt_major(entry: &EntryScreen) -> String {
    let options = entry.major_options();
    if options.is_empty() {
        return prompt("Jurusan: ");
    }

    println!("Pilih Jurusan:");
    let mut index = 0;
    for faculty in entry.faculties.entries() {
        println!("{}", faculty.name);
        for major in &faculty.majors {
            index += 1;
            println!("  {}. {}", index, major);
        }
    }

    let input = prompt("Jurusan (nomor atau nama): ");
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => options[n - 1].to_string(),
        _ => input,
    }
}

async fn run_dashboard(client: &PortalClient, state: &AppState) {
    let mut dash = Dashboard::new();

    // Fetch on mount: all three panels, independent and unordered.
    let class = dash.begin_schedule_fetch(state);
    let major = dash.begin_syllabus_fetch(state);
    dash.begin_staff_fetch();
    render_dashboard(&dash, state);

    let (schedule, syllabus, staff) = tokio::join!(
        client.fetch_schedule(&class),
        client.fetch_syllabus(&major),
        client.fetch_staff(),
    );
    dash.schedule_loaded(schedule);
    dash.syllabus_loaded(syllabus);
    dash.staff_loaded(staff);

    loop {
        render_dashboard(&dash, state);

        let command = prompt("[j]adwal [s]ap [d]osen untuk refresh, [q] keluar: ");
        match command.as_str() {
            "j" => {
                let class = dash.begin_schedule_fetch(state);
                render_dashboard(&dash, state);
                dash.schedule_loaded(client.fetch_schedule(&class).await);
            }
            "s" => {
                let major = dash.begin_syllabus_fetch(state);
                render_dashboard(&dash, state);
                dash.syllabus_loaded(client.fetch_syllabus(&major).await);
            }
            "d" => {
                dash.begin_staff_fetch();
                render_dashboard(&dash, state);
                dash.staff_loaded(client.fetch_staff().await);
            }
            "q" => return,
            _ => {}
        }
    }
}

fn render_dashboard(dash: &Dashboard, state: &AppState) {
    let identity = state.identity();

    println!();
    for line in dash.render_header(state, &identity) {
        println!("{}", line);
    }
    println!();
    for line in dash.render_schedule() {
        println!("{}", line);
    }
    println!();
    for line in dash.render_syllabus() {
        println!("{}", line);
    }
    println!();
    for line in dash.render_staff() {
        println!("{}", line);
    }
}

fn print_message(message: &str) {
    if !message.is_empty() {
        println!("{}", message);
    }
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(e) => {
            log::warn!("stdin read failed: {}", e);
            String::new()
        }
    }
}
