//! Ratatui rendering of the daily home page.

use model::{DayRecord, Mode, Model};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn draw(f: &mut Frame, model: &Model) {
    let area = f.area();

    let [header_area, date_area, lucky_area, vibe_area, dog_area, bottom_bar] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

    draw_header(header_area, f, model);
    draw_date_content(date_area, f, model.current_day());
    draw_lucky_content(lucky_area, f, model.lucky_number());
    draw_vibe_content(vibe_area, f, model);
    draw_dog_content(dog_area, f, model.featured_dog_url());

    let caption = match model.mode() {
        Mode::Navigation => "Update Day (u) | Change Dog (d) | Vibe (v) | Quit (q)",
        Mode::Vibe => "Vibe input | Enter/Esc to finish",
    };
    f.render_widget(caption, bottom_bar);
}

fn draw_header(rect: Rect, frame: &mut Frame, model: &Model) {
    let (r, g, b) = model.header_color().rgb;
    let style = Style::default().bg(Color::Rgb(r, g, b)).fg(Color::Black);

    // paint the whole slot, then center the title line inside it
    frame.render_widget(Block::default().style(style), rect);

    let [_, title_slot, _] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(rect);

    let title = Paragraph::new(Line::styled("Daily Home Page", style.bold())).centered();
    frame.render_widget(title, title_slot);
}

fn draw_date_content(rect: Rect, frame: &mut Frame, day: Option<&DayRecord>) {
    let block = Block::default().title("Todays date:").borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let Some(day) = day else {
        return;
    };
    let lines = vec![
        Line::raw(day.weekday.clone()),
        Line::raw(day.month.clone()),
        Line::raw(day.day.to_string()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_lucky_content(rect: Rect, frame: &mut Frame, lucky_number: f64) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let line = format!("Today's lucky number is: {lucky_number}");
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_vibe_content(rect: Rect, frame: &mut Frame, model: &Model) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let input = match model.mode() {
        // block cursor while the input owns the keyboard
        Mode::Vibe => Line::raw(format!("{}█", model.vibe())),
        Mode::Navigation if model.vibe().is_empty() => Line::styled(
            "enter your vibe here",
            Style::default().fg(Color::DarkGray),
        ),
        Mode::Navigation => Line::raw(model.vibe().to_string()),
    };
    let lines = vec![
        input,
        Line::raw(format!("Today's vibe is: {}", model.vibe())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_dog_content(rect: Rect, frame: &mut Frame, url: Option<&str>) {
    let block = Block::default().title("Featured dog:").borders(Borders::ALL);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let line = match url {
        Some(url) => Line::raw(url.to_string()),
        None => Line::styled("no dog yet", Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(line), inner);
}
