use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::heatmap::colormap::{render_color_grid, ColorGrid};
use crate::heatmap::config::HeatmapConfig;
use crate::heatmap::density::{build_density_map, DensityMap};
use crate::heatmap::job::{HeatmapJob, JobStatus};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

/// Pool lifecycle. Submitting against a shut-down engine is a deliberate
/// transition back to Accepting, not an implicit side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Idle,
    Accepting,
    Draining,
    Shutdown,
}

/// Builds normalized density maps and rendered color grids for independent
/// point-sets on a fixed-size background worker pool.
///
/// Each job owns its grid buffers outright, so the numeric hot loop needs no
/// locking; the only shared mutable state is the progress counters. A
/// failing job is marked Failed and logged without touching its siblings.
pub struct HeatmapEngine {
    config: HeatmapConfig,
    inner: Arc<Mutex<EngineState>>,
    limiter: Arc<Semaphore>,
    completed_jobs: Arc<AtomicUsize>,
    total_jobs: Arc<AtomicUsize>,
}

struct EngineState {
    phase: EnginePhase,
    jobs: HashMap<String, HeatmapJob>,
    handles: Vec<JoinHandle<()>>,
    cancel_token: CancellationToken,
}

impl HeatmapEngine {
    pub fn new(config: HeatmapConfig) -> Self {
        let workers = config.worker_count.max(1);
        Self {
            config,
            inner: Arc::new(Mutex::new(EngineState {
                phase: EnginePhase::Idle,
                jobs: HashMap::new(),
                handles: Vec::new(),
                cancel_token: CancellationToken::new(),
            })),
            limiter: Arc::new(Semaphore::new(workers)),
            completed_jobs: Arc::new(AtomicUsize::new(0)),
            total_jobs: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Enqueue density computation for one point-set and return immediately.
    ///
    /// `grid_width`/`grid_height` are the pixel dimensions of the region the
    /// points live in. If the engine was shut down, the pool is re-opened
    /// before the job is accepted.
    pub async fn submit(
        &self,
        job_id: impl Into<String>,
        points: Vec<(f64, f64)>,
        grid_width: u32,
        grid_height: u32,
    ) -> Result<()> {
        let job_id = job_id.into();
        let mut state = self.inner.lock().await;

        match state.phase {
            EnginePhase::Idle | EnginePhase::Shutdown => {
                // Fresh batch: re-open the pool and restart progress
                // accounting from zero.
                state.phase = EnginePhase::Accepting;
                state.cancel_token = CancellationToken::new();
                self.completed_jobs.store(0, Ordering::SeqCst);
                self.total_jobs.store(0, Ordering::SeqCst);
                log_info!("heatmap engine accepting jobs");
            }
            EnginePhase::Accepting => {}
            EnginePhase::Draining => bail!("heatmap engine is draining"),
        }

        if state.jobs.contains_key(&job_id) {
            bail!("heatmap job {job_id} already submitted");
        }

        state.jobs.insert(job_id.clone(), HeatmapJob::pending(job_id.clone()));
        self.total_jobs.fetch_add(1, Ordering::SeqCst);

        let inner = Arc::clone(&self.inner);
        let limiter = Arc::clone(&self.limiter);
        let completed_jobs = Arc::clone(&self.completed_jobs);
        let cancel_token = state.cancel_token.clone();
        let config = self.config.clone();

        let handle = tokio::spawn(async move {
            // Fixed-size pool: one permit per in-flight job body.
            let _permit = match Arc::clone(&limiter).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return,
            };

            // Shutdown arrived before this job ever started; its state is
            // being discarded, so skip the computation.
            if cancel_token.is_cancelled() {
                return;
            }

            set_status(&inner, &job_id, JobStatus::Running).await;

            let worker = tokio::task::spawn_blocking(move || {
                let map = build_density_map(&points, grid_width, grid_height, &config)?;
                let rendered = render_color_grid(&map);
                Ok::<(DensityMap, ColorGrid), anyhow::Error>((map, rendered))
            })
            .await;

            let outcome = match worker {
                Ok(result) => result,
                Err(join_err) => Err(anyhow::anyhow!("density worker panicked: {join_err}")),
            };

            let mut state = inner.lock().await;
            if let Some(job) = state.jobs.get_mut(&job_id) {
                match outcome {
                    Ok((map, rendered)) => {
                        job.status = JobStatus::Done;
                        job.density_map = Some(map);
                        job.rendered = Some(rendered);
                        log_info!("heatmap job {job_id} done");
                    }
                    Err(err) => {
                        // Isolated to this job; siblings keep running.
                        log_error!("heatmap job {job_id} failed: {err:?}");
                        job.status = JobStatus::Failed;
                    }
                }
            }
            drop(state);

            completed_jobs.fetch_add(1, Ordering::SeqCst);
        });

        state.handles.push(handle);
        Ok(())
    }

    /// Fraction of submitted jobs that have concluded (Done or Failed),
    /// as a lock-free snapshot. Reaches 1.0 once every job of the current
    /// batch has finished, whether or not it succeeded.
    pub fn progress(&self) -> f64 {
        let total = self.total_jobs.load(Ordering::SeqCst);
        let completed = self.completed_jobs.load(Ordering::SeqCst);
        completed as f64 / total.max(1) as f64
    }

    pub fn is_generating(&self) -> bool {
        self.completed_jobs.load(Ordering::SeqCst) < self.total_jobs.load(Ordering::SeqCst)
    }

    pub async fn phase(&self) -> EnginePhase {
        self.inner.lock().await.phase
    }

    /// Snapshot of one job, if it exists.
    pub async fn job(&self, job_id: &str) -> Option<HeatmapJob> {
        self.inner.lock().await.jobs.get(job_id).cloned()
    }

    /// Snapshots of all jobs, in no particular order.
    pub async fn jobs(&self) -> Vec<HeatmapJob> {
        self.inner.lock().await.jobs.values().cloned().collect()
    }

    /// Wait until every submitted job has concluded. Job state is kept.
    pub async fn wait_idle(&self) -> Result<()> {
        loop {
            let handles = {
                let mut state = self.inner.lock().await;
                std::mem::take(&mut state.handles)
            };
            if handles.is_empty() {
                return Ok(());
            }
            for handle in handles {
                handle
                    .await
                    .context("heatmap worker task failed to join")?;
            }
        }
    }

    /// Stop accepting jobs, let in-flight work finish, and discard all job
    /// state. Queued jobs that never started are skipped. Safe to call with
    /// no jobs submitted, and safe to call twice.
    pub async fn shutdown(&self) -> Result<()> {
        {
            let mut state = self.inner.lock().await;
            state.phase = EnginePhase::Draining;
            state.cancel_token.cancel();
        }

        self.wait_idle().await?;

        let mut state = self.inner.lock().await;
        state.jobs.clear();
        state.phase = EnginePhase::Shutdown;
        self.completed_jobs.store(0, Ordering::SeqCst);
        self.total_jobs.store(0, Ordering::SeqCst);
        log_info!("heatmap engine shut down");
        Ok(())
    }

    /// Drain and discard like `shutdown`, then return to Idle so the next
    /// submission finds a fresh engine.
    pub async fn reset(&self) -> Result<()> {
        self.shutdown().await?;
        self.inner.lock().await.phase = EnginePhase::Idle;
        Ok(())
    }
}

impl Clone for HeatmapEngine {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            inner: Arc::clone(&self.inner),
            limiter: Arc::clone(&self.limiter),
            completed_jobs: Arc::clone(&self.completed_jobs),
            total_jobs: Arc::clone(&self.total_jobs),
        }
    }
}

async fn set_status(inner: &Arc<Mutex<EngineState>>, job_id: &str, status: JobStatus) {
    let mut state = inner.lock().await;
    if let Some(job) = state.jobs.get_mut(job_id) {
        // Terminal states are sticky.
        if !job.status.is_terminal() {
            job.status = status;
        }
    }
}
