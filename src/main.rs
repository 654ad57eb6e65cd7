use std::io::{self, BufRead, Stdout, Write};

use anyhow::{bail, Context};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

use worldventure::config::Settings;
use worldventure::validate::{is_valid_name, is_valid_tier_label};
use worldventure::{Cell, Direction, Encounter, GameSession, Outcome, Player, Position, Question, Tier};

const CELL_W: usize = 2;
const HELP: &str = "Move: hjkl / wasd / arrows   q: quit";

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Wall,
    Free,
    Start,
    Goal,
    Question,
    Info,
}

struct Renderer {
    last: Vec<Option<Glyph>>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            last: vec![None; rows * cols],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "worldventure=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_env();
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let name = prompt_until("Player name: ", is_valid_name, "Max 20 characters, letters, digits and spaces only.")?;
    let tier: Tier = prompt_until(
        "Level (basic / intermediate / advanced / legend): ",
        is_valid_tier_label,
        "Unknown level.",
    )?
    .parse()?;

    let level = tier.level(&mut rng).context("building level")?;
    let player = Player::with_lives(name.trim(), tier.label(), settings.lives);
    let mut session = GameSession::new(player, level);
    if !session.can_start() {
        bail!("the game cannot start with this player and level");
    }
    session.start()?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &mut session);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    let verdict = match session.outcome() {
        Some(Outcome::Won) => "You reached the goal!",
        Some(Outcome::Lost) => "Out of lives.",
        _ => "Game over.",
    };
    println!("{} Final score: {}", verdict, session.player().score());
    Ok(())
}

fn prompt_until(prompt: &str, valid: impl Fn(&str) -> bool, complaint: &str) -> anyhow::Result<String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            bail!("input closed");
        };
        let line = line?;
        if valid(&line) {
            return Ok(line);
        }
        println!("{}", complaint);
    }
}

fn run(stdout: &mut Stdout, session: &mut GameSession) -> io::Result<()> {
    let grid = session.grid();
    let mut renderer = Renderer::new(grid.rows(), grid.cols());
    let mut message = HELP.to_string();
    render(stdout, session, &mut renderer, &message)?;

    while session.is_running() {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let dir = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                session.terminate();
                break;
            }
            KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Up => Direction::Up,
            KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Down => Direction::Down,
            KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Left => Direction::Left,
            KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Right => Direction::Right,
            _ => {
                message = format!("Invalid command. {}", HELP);
                render(stdout, session, &mut renderer, &message)?;
                continue;
            }
        };

        if !session.try_move(dir) {
            message = "Invalid move.".to_string();
            render(stdout, session, &mut renderer, &message)?;
            continue;
        }

        message = match session.encounter() {
            Encounter::Question(q) => {
                let question = q.clone();
                render(stdout, session, &mut renderer, "")?;
                ask(stdout, session, &renderer, &question)?
            }
            Encounter::Fact(fact) => fact.to_string(),
            Encounter::Goal => {
                session.terminate();
                "You reached the goal!".to_string()
            }
            Encounter::Nothing => String::new(),
        };
        render(stdout, session, &mut renderer, &message)?;
    }
    Ok(())
}

/// Collects an answer for `question` and feeds it to the session. Returns the
/// feedback line.
fn ask(stdout: &mut Stdout, session: &mut GameSession, renderer: &Renderer, question: &Question) -> io::Result<String> {
    let rows = session.grid().rows() as u16;
    draw_line(stdout, renderer, rows + 1, question.prompt(), Color::Yellow)?;

    let correct = if question.is_free_text() {
        match read_text(stdout, renderer, rows + 2)? {
            Some(text) => session.answer_text(&text),
            None => return Ok("Question skipped.".to_string()),
        }
    } else {
        let listing: Vec<String> = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, opt)| format!("{}) {}", i + 1, opt))
            .collect();
        draw_line(stdout, renderer, rows + 2, &listing.join("   "), Color::White)?;
        match read_choice(question.options().len())? {
            Some(idx) => session.answer(idx),
            None => return Ok("Question skipped.".to_string()),
        }
    };
    draw_line(stdout, renderer, rows + 2, "", Color::Reset)?;

    if correct {
        Ok(format!("Correct! +{} points", question.points()))
    } else {
        let expected = session.expected_answer().unwrap_or_default();
        Ok(format!("Wrong, you lose a life. Correct answer: {}", expected))
    }
}

fn read_choice(count: usize) -> io::Result<Option<usize>> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(None),
                KeyCode::Char(c) => {
                    if let Some(d) = c.to_digit(10) {
                        let d = d as usize;
                        if (1..=count).contains(&d) {
                            return Ok(Some(d - 1));
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn read_text(stdout: &mut Stdout, renderer: &Renderer, row: u16) -> io::Result<Option<String>> {
    let mut text = String::new();
    loop {
        draw_line(stdout, renderer, row, &format!("> {}", text), Color::White)?;
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(Some(text)),
                KeyCode::Esc => return Ok(None),
                KeyCode::Backspace => {
                    text.pop();
                }
                KeyCode::Char(c) => text.push(c),
                _ => {}
            }
        }
    }
}

fn render(stdout: &mut Stdout, session: &GameSession, renderer: &mut Renderer, message: &str) -> io::Result<()> {
    let grid = session.grid();
    let needed_h = (grid.rows() + 4) as u16;
    let needed_w = (grid.cols() * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let player = session.player();
    let hud = format!(
        "{}  Level: {}  Lives: {}  Score: {}",
        player.name(),
        session.level_name(),
        player.lives(),
        player.score()
    );
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let glyph = glyph_for(session, pos);
            let idx = row * grid.cols() + col;
            if renderer.needs_full || renderer.last[idx] != Some(glyph) {
                renderer.last[idx] = Some(glyph);
                draw_cell(stdout, renderer, row, col, glyph)?;
            }
        }
    }
    renderer.needs_full = false;

    draw_line(stdout, renderer, grid.rows() as u16 + 1, message, Color::Cyan)?;
    stdout.flush()
}

fn glyph_for(session: &GameSession, pos: Position) -> Glyph {
    if pos == session.player().position() {
        return Glyph::Player;
    }
    match session.grid().get(pos) {
        Some(Cell::Wall) | None => Glyph::Wall,
        Some(Cell::Free) => Glyph::Free,
        Some(Cell::Start) => Glyph::Start,
        Some(Cell::Goal) => Glyph::Goal,
        Some(Cell::Question) => Glyph::Question,
        Some(Cell::Info) => Glyph::Info,
    }
}

fn draw_cell(stdout: &mut Stdout, renderer: &Renderer, row: usize, col: usize, glyph: Glyph) -> io::Result<()> {
    let (text, color) = match glyph {
        Glyph::Player => ("😃", Color::Yellow),
        Glyph::Wall => ("██", Color::Blue),
        Glyph::Free => ("  ", Color::Reset),
        Glyph::Start => ("S ", Color::Green),
        Glyph::Goal => ("🏁", Color::Red),
        Glyph::Question => ("? ", Color::Yellow),
        Glyph::Info => ("i ", Color::Magenta),
    };
    let x_pos = renderer.origin_x + (col * CELL_W) as u16;
    let y_pos = renderer.origin_y + row as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

/// Writes `text` on the line `offset` rows below the top of the board.
fn draw_line(stdout: &mut Stdout, renderer: &Renderer, offset: u16, text: &str, color: Color) -> io::Result<()> {
    stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y + offset))?;
    stdout.queue(Clear(ClearType::CurrentLine))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    stdout.queue(ResetColor)?;
    stdout.flush()
}
