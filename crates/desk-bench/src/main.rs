use std::io::{self, Stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

#[derive(Parser, Debug)]
#[command(
    name = "desk-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compositing benchmark: drifting framed windows drawn to offscreen \
             buffers and blitted with clipping, the way the desktop composites"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(
        short = 'd',
        long = "duration",
        value_name = "SECONDS",
        default_value_t = 10.0
    )]
    duration_seconds: f64,

    /// Target frames per second. Used to pace rendering so comparisons are repeatable.
    #[arg(short = 'f', long = "fps", value_name = "FPS", default_value_t = 60.0)]
    target_fps: f64,

    /// Number of drifting windows to composite per frame.
    #[arg(short = 'w', long = "windows", value_name = "COUNT", default_value_t = 12)]
    window_count: usize,
}

impl BenchCli {
    fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_seconds)
    }

    fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps)
    }
}

struct BenchConfig {
    duration: Duration,
    target_fps: f64,
    frame_budget: Duration,
    window_count: usize,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(0.5..=600.0).contains(&cli.duration_seconds) {
            return Err("duration must be between 0.5 and 600 seconds".to_string());
        }
        if !(1.0..=240.0).contains(&cli.target_fps) {
            return Err("fps must be between 1 and 240".to_string());
        }
        if !(1..=128).contains(&cli.window_count) {
            return Err("windows must be between 1 and 128".to_string());
        }
        Ok(Self {
            duration: cli.duration(),
            target_fps: cli.target_fps,
            frame_budget: cli.frame_budget(),
            window_count: cli.window_count,
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let bench_result = run_benchmark(&mut terminal, &config);

    terminal.show_cursor()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;

    let stats = bench_result?;
    println!("{}", stats.final_report(&config));

    Ok(())
}

type BenchTerminal = Terminal<CrosstermBackend<Stdout>>;

fn run_benchmark(terminal: &mut BenchTerminal, config: &BenchConfig) -> io::Result<BenchStats> {
    let mut stats = BenchStats::new();
    let mut rng = Lcg::seeded_from_clock();
    let size = terminal.size()?;
    let mut screen = Rect::new(0, 0, size.width, size.height);
    let mut windows: Vec<DriftWindow> = (0..config.window_count)
        .map(|index| DriftWindow::spawn(index, screen, &mut rng))
        .collect();
    let mut exit_reason = ExitReason::Completed;

    loop {
        let frame_start = Instant::now();
        let mut cells_drawn: u64 = 0;
        terminal.draw(|frame| {
            screen = frame.area();
            cells_drawn = draw_frame(frame, &windows, &stats, config);
        })?;
        let draw_time = frame_start.elapsed();
        stats.record_frame(cells_drawn, draw_time);

        if stats.elapsed() >= config.duration {
            break;
        }

        if poll_for_exit(config.frame_budget.saturating_sub(draw_time))? {
            exit_reason = ExitReason::UserAbort;
            break;
        }

        for window in &mut windows {
            window.advance(screen);
        }
    }

    stats.exit_reason = exit_reason;
    stats.mark_completed();
    Ok(stats)
}

fn draw_frame(
    frame: &mut Frame,
    windows: &[DriftWindow],
    stats: &BenchStats,
    config: &BenchConfig,
) -> u64 {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return 0;
    }

    let mut cells: u64 = 0;
    {
        let buffer = frame.buffer_mut();
        fill_rect(buffer, area, Style::default().bg(Color::Rgb(12, 16, 28)));
        cells += area.width as u64 * area.height as u64;

        for window in windows.iter() {
            cells += window.composite(buffer, area);
        }
    }

    let overlay_lines = build_overlay_lines(stats, config);
    if let Some(overlay_area) = overlay_area_for(area, &overlay_lines) {
        {
            let buffer = frame.buffer_mut();
            fill_rect(buffer, overlay_area, Style::default().bg(Color::Black));
        }
        frame.render_widget(
            Paragraph::new(overlay_lines.join("\n"))
                .style(Style::default().fg(Color::White).bg(Color::Black)),
            overlay_area,
        );
        cells += overlay_area.width as u64 * overlay_area.height as u64;
    }

    cells
}

fn fill_rect(buffer: &mut Buffer, area: Rect, style: Style) {
    for y in 0..area.height {
        for x in 0..area.width {
            let px = area.x.saturating_add(x);
            let py = area.y.saturating_add(y);
            buffer[(px, py)].set_symbol(" ").set_style(style);
        }
    }
}

fn build_overlay_lines(stats: &BenchStats, config: &BenchConfig) -> Vec<String> {
    let elapsed = stats.elapsed().as_secs_f64();
    let duration_target = config.duration.as_secs_f64();
    let progress = if duration_target > 0.0 {
        (elapsed / duration_target).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let fps_avg = if elapsed > 0.0 {
        stats.frame_count as f64 / elapsed
    } else {
        0.0
    };
    let updates_per_sec = if elapsed > 0.0 {
        stats.cell_updates as f64 / elapsed
    } else {
        0.0
    };

    vec![
        "== Desk Bench ==".to_string(),
        format!(
            "elapsed {:>5.1}/{:>5.1}s ({:>3.0}%)",
            elapsed,
            duration_target,
            progress * 100.0
        ),
        format!(
            "windows {:>3} | frames {:>8} | avg fps {:>5.1} / target {:>5.1}",
            config.window_count, stats.frame_count, fps_avg, config.target_fps
        ),
        format!(
            "cells {:>11} | {:>8.0}/s",
            stats.cell_updates, updates_per_sec
        ),
        format!(
            "frame ms avg {:>6.2} | best {:>5.2} | worst {:>5.2}",
            stats.average_frame_ms(),
            stats.fastest_frame_ms(),
            stats.slowest_frame_ms()
        ),
        "press q / esc / ctrl+c to stop".to_string(),
    ]
}

fn overlay_area_for(window_area: Rect, lines: &[String]) -> Option<Rect> {
    let available_width = window_area.width.saturating_sub(2);
    let available_height = window_area.height.saturating_sub(2);
    if available_width < 8 || available_height < 4 {
        return None;
    }
    let text_width = lines.iter().map(|line| line.len() as u16).max().unwrap_or(0);
    let text_height = lines.len() as u16;
    Some(Rect {
        x: window_area.x + 1,
        y: window_area.y + 1,
        width: text_width.saturating_add(2).clamp(8, available_width),
        height: text_height.saturating_add(2).clamp(4, available_height),
    })
}

/// One synthetic window: a bordered surface rendered offscreen each frame
/// and blitted into the screen buffer with clipping, exactly the work the
/// desktop does per visible window.
struct DriftWindow {
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
    width: u16,
    height: u16,
    hue: u8,
    label: String,
}

impl DriftWindow {
    fn spawn(index: usize, screen: Rect, rng: &mut Lcg) -> Self {
        let width = 18 + (rng.next() % 22) as u16;
        let height = 6 + (rng.next() % 8) as u16;
        let max_x = screen.width.saturating_sub(width).max(1) as f64;
        let max_y = screen.height.saturating_sub(height).max(1) as f64;
        Self {
            x: (rng.next() as f64 / u32::MAX as f64) * max_x,
            y: (rng.next() as f64 / u32::MAX as f64) * max_y,
            dx: 0.3 + (rng.next() % 100) as f64 / 120.0,
            dy: 0.2 + (rng.next() % 100) as f64 / 180.0,
            width,
            height,
            hue: (rng.next() & 0xFF) as u8,
            label: format!("bench-{index}"),
        }
    }

    fn advance(&mut self, screen: Rect) {
        self.x += self.dx;
        self.y += self.dy;
        let max_x = screen.width.saturating_sub(self.width) as f64;
        let max_y = screen.height.saturating_sub(self.height) as f64;
        if self.x <= 0.0 || self.x >= max_x {
            self.dx = -self.dx;
            self.x = self.x.clamp(0.0, max_x.max(0.0));
        }
        if self.y <= 0.0 || self.y >= max_y {
            self.dy = -self.dy;
            self.y = self.y.clamp(0.0, max_y.max(0.0));
        }
    }

    fn composite(&self, screen_buffer: &mut Buffer, screen: Rect) -> u64 {
        let local = Rect::new(0, 0, self.width, self.height);
        let mut surface = Buffer::empty(local);
        self.paint_surface(&mut surface, local);

        let origin_x = self.x as i32;
        let origin_y = self.y as i32;
        let mut cells: u64 = 0;
        for cy in 0..local.height {
            for cx in 0..local.width {
                let dest_x = origin_x + cx as i32;
                let dest_y = origin_y + cy as i32;
                if dest_x < screen.x as i32
                    || dest_y < screen.y as i32
                    || dest_x >= screen.right() as i32
                    || dest_y >= screen.bottom() as i32
                {
                    continue;
                }
                screen_buffer[(dest_x as u16, dest_y as u16)] = surface[(cx, cy)].clone();
                cells += 1;
            }
        }
        cells
    }

    fn paint_surface(&self, surface: &mut Buffer, local: Rect) {
        let border = Style::default().fg(Color::Rgb(self.hue, 180, 220));
        let body = Style::default()
            .fg(Color::Rgb(140, 150, self.hue))
            .bg(Color::Rgb(24, 28, 40));
        for y in 0..local.height {
            for x in 0..local.width {
                let on_border =
                    x == 0 || y == 0 || x == local.width - 1 || y == local.height - 1;
                let symbol = if on_border { "█" } else { "·" };
                let style = if on_border { border } else { body };
                surface[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
        let title = &self.label;
        let max_len = local.width.saturating_sub(4) as usize;
        let shown: String = title.chars().take(max_len).collect();
        surface.set_string(2, 0, shown, border.add_modifier(Modifier::BOLD));
    }
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    frame_count: u64,
    cell_updates: u64,
    total_draw_time: Duration,
    fastest_frame: Duration,
    slowest_frame: Duration,
    exit_reason: ExitReason,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            frame_count: 0,
            cell_updates: 0,
            total_draw_time: Duration::ZERO,
            fastest_frame: Duration::MAX,
            slowest_frame: Duration::ZERO,
            exit_reason: ExitReason::Completed,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_frame(&mut self, cells: u64, draw_time: Duration) {
        self.frame_count = self.frame_count.saturating_add(1);
        self.cell_updates = self.cell_updates.saturating_add(cells);
        self.total_draw_time += draw_time;
        if draw_time < self.fastest_frame {
            self.fastest_frame = draw_time;
        }
        if draw_time > self.slowest_frame {
            self.slowest_frame = draw_time;
        }
    }

    fn average_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        (self.total_draw_time.as_secs_f64() / self.frame_count as f64) * 1_000.0
    }

    fn fastest_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        self.fastest_frame.as_secs_f64() * 1_000.0
    }

    fn slowest_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        self.slowest_frame.as_secs_f64() * 1_000.0
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let fps_avg = if elapsed > 0.0 {
            self.frame_count as f64 / elapsed
        } else {
            0.0
        };
        let cells_per_second = if elapsed > 0.0 {
            self.cell_updates as f64 / elapsed
        } else {
            0.0
        };

        indoc::formatdoc!(
            r#"
            Desk bench {status}.
            Duration: {elapsed:.2}s (target {target:.2}s)
            Windows: {windows} composited per frame
            Frames: {frames} | Avg FPS: {fps:.1} (target {target_fps:.1})
            Avg frame: {avg:.2} ms | Best: {best:.2} ms | Worst: {worst:.2} ms
            Cell updates: {cells} total (~{cells_per_sec:.0}/s)
            "#,
            status = self.exit_reason.describe(),
            elapsed = elapsed,
            target = config.duration.as_secs_f64(),
            windows = config.window_count,
            frames = self.frame_count,
            fps = fps_avg,
            target_fps = config.target_fps,
            avg = self.average_frame_ms(),
            best = self.fastest_frame_ms(),
            worst = self.slowest_frame_ms(),
            cells = self.cell_updates,
            cells_per_sec = cells_per_second,
        )
    }
}

#[derive(Copy, Clone)]
enum ExitReason {
    Completed,
    UserAbort,
}

impl ExitReason {
    fn describe(self) -> &'static str {
        match self {
            ExitReason::Completed => "completed full duration",
            ExitReason::UserAbort => "stopped by user",
        }
    }
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn seeded_from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
            ^ 0x9E37_79B9_7F4A_7C15;
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
}

fn poll_for_exit(wait: Duration) -> io::Result<bool> {
    if !event::poll(wait)? {
        return Ok(false);
    }
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(
                    key.code,
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
                ) {
                    return Ok(true);
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(true);
                }
            }
            _ => {}
        }
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(false)
}
