use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use dial_engine::coords::square_side;
use dial_engine::core::{ClockFace, RedrawRequest};
use dial_engine::scene::DrawList;
use dial_engine::time::{SystemClock, Tick, Ticker, TimeSampler};

use crate::config::StudioConfig;
use crate::persist::{self, HostState, SavedInstance};
use crate::svg;

/// Drives a [`ClockFace`] the way a UI toolkit would: size once, then one frame
/// per tick until the frame budget runs out.
pub struct Runtime {
    config: StudioConfig,
    face: ClockFace,
    draw_list: DrawList,
    ticker: Ticker,
    host: HostState,
}

impl Runtime {
    pub fn new(config: StudioConfig) -> Self {
        let face = ClockFace::new(TimeSampler::new(SystemClock, config.zone), config.style);
        let ticker = Ticker::with_interval(config.interval.unwrap_or(Ticker::DEFAULT_INTERVAL));
        let host = HostState { size: config.size, frames: 0 };

        Self {
            config,
            face,
            draw_list: DrawList::new(),
            ticker,
            host,
        }
    }

    /// Runs until the configured number of frames has been written.
    pub fn run(mut self) -> Result<()> {
        self.resume();

        let side = square_side(self.config.size, self.config.size);
        self.face.on_geometry_changed(side, side);

        // First frame goes out immediately; every later one is requested by the face.
        self.ticker.arm_after(Instant::now(), Duration::ZERO);

        while let Some(wait) = self.ticker.until_deadline(Instant::now()) {
            if !wait.is_zero() {
                thread::sleep(wait);
            }

            let Some(tick) = self.ticker.poll(Instant::now()) else {
                continue;
            };

            let request = self.frame(tick)?;

            if self.budget_spent() {
                self.ticker.disarm();
                break;
            }

            let delay = self.config.interval.unwrap_or(request.after);
            self.ticker.arm_after(Instant::now(), delay);
        }

        log::info!("rendered {} frames into {}", self.host.frames, self.config.out.display());
        Ok(())
    }

    fn frame(&mut self, tick: Tick) -> Result<RedrawRequest> {
        if tick.late_by > self.ticker.interval() / 2 {
            log::warn!("tick {} ran {:?} late", tick.index, tick.late_by);
        }

        let request = self.face.render_frame(&mut self.draw_list);
        self.host.frames += 1;

        if let Some(sample) = self.face.last_sample() {
            log::info!(
                "frame {} at {:02}:{:02}:{:02} ({} commands)",
                self.host.frames,
                sample.hour,
                sample.minute,
                sample.second,
                self.draw_list.len()
            );
        }

        let size = self.config.size;
        let document = svg::to_svg_string(&mut self.draw_list, size, size);
        write_atomically(&self.config.out, &document)?;

        self.checkpoint()?;
        Ok(request)
    }

    fn budget_spent(&self) -> bool {
        self.config.ticks.is_some_and(|limit| self.host.frames >= limit)
    }

    /// Restores the face from the state file, if there is a usable one.
    fn resume(&mut self) {
        let Some(path) = self.config.state.as_deref() else {
            return;
        };

        match persist::load(path) {
            Ok(Some(saved)) => {
                if let Some(previous) = saved.host_state() {
                    log::info!("resuming after {} frames at size {}", previous.frames, previous.size);
                }
                self.face.restore(saved.view);
            }
            Ok(None) => log::info!("no saved state at {}; starting fresh", path.display()),
            Err(e) => log::warn!("ignoring saved state: {e:#}"),
        }
    }

    /// Checkpoints the face so a killed process can resume from the last frame.
    fn checkpoint(&self) -> Result<()> {
        let Some(path) = self.config.state.as_deref() else {
            return Ok(());
        };

        let saved = SavedInstance::new(&self.host, self.face.save())?;
        persist::store(path, &saved)
    }
}

fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let tmp = persist::sibling_tmp(path);
    fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
