/// Performance playback: the scene-by-scene, line-by-line state machine.
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::core::cancel::{CancellationToken, Checkpoint};
use crate::core::config::PerformanceConfig;
use crate::core::speech::{SpeechRequest, SpeechService};
use crate::schema::character::{Character, CharacterId};
use crate::schema::performance::{DialogueLine, InteractiveElement, Performance, Scene};

#[derive(Debug, Error)]
pub enum DirectorError {
    #[error("a performance is already running on this director")]
    AlreadyPerforming,
}

/// How a playback run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceOutcome {
    Completed,
    Cancelled,
}

/// Receives playback events. Every method defaults to doing nothing.
pub trait PerformanceObserver {
    fn on_scene_start(&mut self, _scene: &Scene) {}

    fn on_dialogue(&mut self, _line: &DialogueLine, _character: &Character) {}

    /// An interactive prompt is open. Playback holds for a fixed time and
    /// does not read any response.
    fn on_interactive(&mut self, _element: &InteractiveElement) {}

    /// Only called when every scene played without cancellation.
    fn on_complete(&mut self) {}
}

impl PerformanceObserver for () {}

/// Plays one performance at a time.
///
/// Speech is fire-and-forget: each line waits an estimate based on its
/// length, never a completion signal. `stop_performance` is cooperative
/// and takes effect at the next scene, line or prompt boundary; a wait
/// already in progress runs to its end. Until the stopped run has wound
/// down, `is_performing` reports false but a new start is still rejected.
pub struct PerformanceDirector<S> {
    speech: S,
    config: PerformanceConfig,
    active: Mutex<Option<CancellationToken>>,
    scene_cursor: AtomicUsize,
    line_cursor: AtomicUsize,
}

/// Clears the director's active slot when a run ends or its future is dropped.
struct ActiveRun<'a> {
    slot: &'a Mutex<Option<CancellationToken>>,
    token: CancellationToken,
}

impl Drop for ActiveRun<'_> {
    fn drop(&mut self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|t| t.same_as(&self.token)) {
            *slot = None;
        }
    }
}

impl<S: SpeechService> PerformanceDirector<S> {
    pub fn new(speech: S) -> Self {
        Self::with_config(speech, PerformanceConfig::default())
    }

    pub fn with_config(speech: S, config: PerformanceConfig) -> Self {
        Self {
            speech,
            config,
            active: Mutex::new(None),
            scene_cursor: AtomicUsize::new(0),
            line_cursor: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &PerformanceConfig {
        &self.config
    }

    /// Play every scene in order, reporting to `observer`.
    ///
    /// Resolves to `Cancelled` without calling `on_complete` if
    /// [`stop_performance`](Self::stop_performance) is called first.
    /// Fails if this director is already playing.
    pub async fn start_performance<O>(
        &self,
        performance: &Performance,
        observer: &mut O,
    ) -> Result<PerformanceOutcome, DirectorError>
    where
        O: PerformanceObserver + ?Sized,
    {
        let run = self.begin()?;
        info!(
            performance_id = %performance.id,
            scenes = performance.scenes.len(),
            lines = performance.line_count(),
            "Starting performance"
        );

        let outcome = self.play(performance, observer, &run.token).await;
        match outcome {
            PerformanceOutcome::Completed => {
                observer.on_complete();
                info!(performance_id = %performance.id, "Performance complete");
            }
            PerformanceOutcome::Cancelled => {
                info!(
                    performance_id = %performance.id,
                    scene = self.scene_cursor.load(Ordering::SeqCst),
                    line = self.line_cursor.load(Ordering::SeqCst),
                    "Performance stopped"
                );
            }
        }
        Ok(outcome)
    }

    /// Ask the running performance to stop and silence the speech service.
    /// Safe to call at any time, any number of times.
    pub fn stop_performance(&self) {
        if let Some(token) = self.lock_active().as_ref() {
            if !token.is_cancelled() {
                token.cancel();
                debug!("Stop requested");
            }
        }
        self.speech.stop();
    }

    /// True while a run is playing and has not been asked to stop.
    pub fn is_performing(&self) -> bool {
        self.lock_active()
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// (scene index, line index) of the most recent checkpoint passed.
    pub fn current_position(&self) -> (usize, usize) {
        (
            self.scene_cursor.load(Ordering::SeqCst),
            self.line_cursor.load(Ordering::SeqCst),
        )
    }

    fn lock_active(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> Result<ActiveRun<'_>, DirectorError> {
        let mut active = self.lock_active();
        if active.is_some() {
            warn!("Rejected start: a performance is still running or winding down");
            return Err(DirectorError::AlreadyPerforming);
        }
        let token = CancellationToken::new();
        *active = Some(token.clone());
        self.scene_cursor.store(0, Ordering::SeqCst);
        self.line_cursor.store(0, Ordering::SeqCst);
        Ok(ActiveRun {
            slot: &self.active,
            token,
        })
    }

    async fn play<O>(
        &self,
        performance: &Performance,
        observer: &mut O,
        token: &CancellationToken,
    ) -> PerformanceOutcome
    where
        O: PerformanceObserver + ?Sized,
    {
        let cast: FxHashMap<&CharacterId, &Character> = performance
            .characters
            .iter()
            .map(|c| (&c.id, c))
            .collect();

        for (scene_index, scene) in performance.scenes.iter().enumerate() {
            let checkpoint = Checkpoint::BeforeScene { scene: scene_index };
            if !checkpoint.pass(token) {
                return PerformanceOutcome::Cancelled;
            }
            self.scene_cursor.store(scene_index, Ordering::SeqCst);
            self.line_cursor.store(0, Ordering::SeqCst);
            debug!(scene = scene.order, setting = %scene.setting, "Scene start");
            observer.on_scene_start(scene);

            for (line_index, line) in scene.dialogue.iter().enumerate() {
                let checkpoint = Checkpoint::BeforeLine {
                    scene: scene_index,
                    line: line_index,
                };
                if !checkpoint.pass(token) {
                    return PerformanceOutcome::Cancelled;
                }
                self.line_cursor.store(line_index, Ordering::SeqCst);

                let Some(character) = cast.get(&line.character_id) else {
                    warn!(character_id = %line.character_id, "Skipping line with unknown speaker");
                    continue;
                };
                observer.on_dialogue(line, character);
                self.speak(line, character);
                sleep(self.config.speaking_time(&line.text, line.pause_after_ms)).await;

                if let Some(prompt) = &line.interactive_prompt {
                    let id = format!("interactive-{}-{}", scene_index, line_index);
                    let element = InteractiveElement::voice_response(id, prompt);
                    self.hold_for_interaction(observer, element).await;
                }
            }

            for (prompt_index, prompt) in scene.interactive_prompts.iter().enumerate() {
                let checkpoint = Checkpoint::BeforePrompt {
                    scene: scene_index,
                    prompt: prompt_index,
                };
                if !checkpoint.pass(token) {
                    return PerformanceOutcome::Cancelled;
                }
                let id = format!("prompt-{}-{}", scene_index, prompt_index);
                let element = InteractiveElement::voice_response(id, prompt);
                self.hold_for_interaction(observer, element).await;
            }
        }

        PerformanceOutcome::Completed
    }

    fn speak(&self, line: &DialogueLine, character: &Character) {
        debug!(speaker = %character.name, emotion = line.emotion.name(), "Line");
        let request = SpeechRequest {
            text: &line.text,
            emotion: line.emotion,
            language: self.config.language,
            voice: character.voice.profile(),
        };
        if let Err(e) = self.speech.speak(&request) {
            warn!(
                speaker = %character.name,
                error = %e,
                "Speech failed, continuing on estimated timing"
            );
        }
    }

    async fn hold_for_interaction<O>(&self, observer: &mut O, element: InteractiveElement)
    where
        O: PerformanceObserver + ?Sized,
    {
        debug!(id = %element.id, prompt = %element.prompt, "Interactive prompt");
        observer.on_interactive(&element);
        sleep(self.config.interaction_wait()).await;
    }
}
