//! Headless driver: feeds a fixed frame step into a strip and reports settles

use std::time::Duration;

use anyhow::Result;
use ratatui::{buffer::Buffer, layout::Rect};

use pagestrip_core::AppConfig;
use pagestrip_tui::{
    cards::{sample_pages, CardDelegate, TabPage},
    PagedTabStrip, Theme,
};

const VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

/// Upper bound on frames spent waiting for a slide to settle
const MAX_FRAMES: usize = 100_000;

#[derive(Debug, Clone, Default)]
pub struct Plan {
    pub pages: usize,
    pub start: usize,
    pub targets: Vec<usize>,
    pub step_ms: u64,
    pub gap_ms: u64,
    pub replace_with: Option<usize>,
}

pub fn run(config: &AppConfig, plan: &Plan) -> Result<()> {
    for line in simulate(config, plan) {
        println!("{}", line);
    }
    Ok(())
}

struct Simulation {
    strip: PagedTabStrip<TabPage, CardDelegate>,
    frame_len: Duration,
    elapsed: Duration,
    buf: Buffer,
    lines: Vec<String>,
}

impl Simulation {
    fn log(&mut self, message: String) {
        self.lines
            .push(format!("[{} ms] {}", self.elapsed.as_millis(), message));
    }

    /// Render one frame and record whatever settled on it
    fn frame(&mut self) {
        self.strip.render(VIEWPORT, &mut self.buf);
        for changed in self.strip.take_notifications() {
            self.log(format!("settled: {:?}", changed.index));
        }
    }

    fn step(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.strip.advance(dt);
        self.frame();
    }

    /// Let `span` pass, one frame at a time
    fn wait(&mut self, span: Duration) {
        let mut left = span;
        while !left.is_zero() {
            let dt = self.frame_len.min(left);
            self.step(dt);
            left -= dt;
        }
    }

    fn settle(&mut self) {
        let mut frames = 0;
        while self.strip.needs_update() && frames < MAX_FRAMES {
            self.step(self.frame_len);
            frames += 1;
        }
    }
}

/// Run `plan` against a strip and return the event log
pub fn simulate(config: &AppConfig, plan: &Plan) -> Vec<String> {
    let strip = PagedTabStrip::new(
        sample_pages(plan.pages, 0),
        CardDelegate::new(Theme::default()),
        config.ui.strip.clone(),
        plan.start,
    );

    let mut sim = Simulation {
        strip,
        frame_len: Duration::from_millis(plan.step_ms.max(1)),
        elapsed: Duration::ZERO,
        buf: Buffer::empty(VIEWPORT),
        lines: Vec::new(),
    };

    let state = sim.strip.state();
    sim.log(format!("start: {:?} of {} pages", state, plan.pages));
    sim.frame();

    for (i, &target) in plan.targets.iter().enumerate() {
        if i > 0 {
            sim.wait(Duration::from_millis(plan.gap_ms));
        }
        let accepted = sim.strip.set_current_index(target);
        sim.log(format!(
            "request {}: {}",
            target,
            if accepted { "accepted" } else { "ignored" }
        ));
        sim.frame();
    }
    sim.settle();

    if let Some(count) = plan.replace_with {
        sim.strip.set_page_model(sample_pages(count, 1));
        sim.log(format!("model replaced with {} pages", count));
        sim.frame();
    }

    let state = sim.strip.state();
    let offset = sim.strip.visual_offset();
    let live = sim.strip.pool().len();
    let created = sim.strip.delegate().created();
    sim.log(format!(
        "final: {:?}, offset {} columns, {} live views, {} created",
        state, offset, live, created
    ));

    sim.lines
}
