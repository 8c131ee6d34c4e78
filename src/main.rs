mod app;
mod clipboard;
mod config;
mod event;
mod layout;
mod sheet;
mod ui;
mod view_mode;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::App;
use event::{AppEvent, EventHandler};
use sheet::character::{SHEET_SUBTITLE, SHEET_TITLE};
use sheet::experience::current_age;
use ui::components::details_panel::DetailsPanel;
use ui::components::editor_overlay::EditorOverlay;
use ui::components::experience_bar::ExperienceBar;
use ui::components::skill_bars::SkillBars;
use ui::components::skill_radar::SkillRadar;
use ui::components::sprite::SpriteView;
use ui::components::tooltip_view;
use ui::components::vitals_panel::VitalsPanel;
use view_mode::ViewMode;

#[derive(Parser)]
#[command(name = "charsheet", version, about = "Terminal RPG-style character sheet")]
struct Cli {
    #[arg(short, long, help = "Theme name (vintage, classic, modern)")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Pin the desktop or mobile arrangement")]
    view: Option<ViewMode>,

    #[arg(long, help = "Start in layout edit mode (mobile arrangement only)")]
    edit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut app = App::new();

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    if let Some(mode) = cli.view {
        app.set_view_mode(mode);
    }
    if cli.edit {
        app.editor.enter(app.view.is_mobile());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(mouse) => app.on_mouse(mouse),
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize(w, h) => app.on_resize(w, h),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc => {
            // Esc doubles as "done editing" while the editor is open
            if app.editor.is_editing() {
                app.finish_editing();
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('e') => app.toggle_edit(),
        KeyCode::Char('r') => app.reset_layout(),
        KeyCode::Char('c') => app.copy_layout(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_scale(1),
        KeyCode::Char('-') => app.adjust_scale(-1),
        KeyCode::Char('d') => app.set_view_mode(ViewMode::Desktop),
        KeyCode::Char('m') => app.set_view_mode(ViewMode::Mobile),
        KeyCode::Char('a') => app.set_view_mode(ViewMode::Auto),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.background()));
    frame.render_widget(bg, area);

    let layout = app.sheet_layout(area);

    render_header(frame, app, layout.header);

    if layout.sprite.width > 0 {
        let eff = app.effective();
        let sprite = SpriteView::new(
            &app.sprite_sheet,
            app.sprite_anim.frame,
            eff.sprite_scale,
            app.theme,
        );
        frame.render_widget(sprite, layout.sprite);
    }

    let today = chrono::Local::now().date_naive();
    let exp = ExperienceBar::new(
        current_age(today),
        app.experience.progress,
        app.experience.gain_value(),
        app.theme,
    );
    frame.render_widget(exp, layout.exp_bar);

    frame.render_widget(VitalsPanel::new(&app.vitals, app.theme), layout.vitals);
    frame.render_widget(DetailsPanel::new(app.theme), layout.details);
    frame.render_widget(SkillRadar::new(&app.skills.soft, app.theme), layout.radar);
    frame.render_widget(SkillBars::new(&app.skills.hard, app.theme), layout.bars);

    render_footer(frame, app, layout.footer);

    if app.editor.is_editing() {
        let effective = app.effective();
        let overlay = EditorOverlay::new(
            &effective,
            app.drag.active_target(),
            app.editor.feedback_text(),
            app.theme,
        );
        frame.render_widget(overlay, overlay_rect(area));
    }

    tooltip_view::render(&app.tooltip, area, app.theme, frame.buffer_mut());
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let arrangement = if app.view.is_mobile() { "mobile" } else { "desktop" };
    let mode_info = format!(" view: {} \u{2192} {arrangement}", app.view.mode_label());

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {SHEET_TITLE} "),
                Style::default()
                    .fg(colors.accent())
                    .bg(colors.background_light())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                mode_info,
                Style::default()
                    .fg(colors.text())
                    .bg(colors.background_light()),
            ),
        ]),
        Line::from(Span::styled(
            format!(" {SHEET_SUBTITLE}"),
            Style::default()
                .fg(colors.text_highlight())
                .bg(colors.background_light()),
        )),
    ];

    let header =
        Paragraph::new(lines).style(Style::default().bg(colors.background_light()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;

    let text = if app.editor.is_editing() {
        " editing layout \u{2014} drag elements with the mouse "
    } else if app.view.is_mobile() {
        " [e] Edit layout  [d/m/a] View  [q] Quit "
    } else {
        " [d/m/a] View  [q] Quit "
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(colors.border()),
    )));
    frame.render_widget(footer, area);
}

/// Bottom-right anchored panel for the edit-mode readout, kept clear of the
/// footer line.
fn overlay_rect(area: Rect) -> Rect {
    let width = 50.min(area.width);
    let height = 9.min(area.height.saturating_sub(1));
    Rect::new(
        area.right().saturating_sub(width),
        area.bottom().saturating_sub(height + 1).max(area.y),
        width,
        height,
    )
    .intersection(area)
}
