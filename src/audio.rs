use crate::constants::POP_PATH;
use crate::core::constants::{CUE_FIRST, CUE_LAST};
use crate::core::{Sound, Voice};
use crate::input::voice_sample_path;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Preloaded voice cues (1..=3 per voice) plus the shared pop.
pub struct SoundBank {
    male: Vec<web::HtmlAudioElement>,
    female: Vec<web::HtmlAudioElement>,
    pop: web::HtmlAudioElement,
}

fn load_audio(path: &str) -> Result<web::HtmlAudioElement, ()> {
    match web::HtmlAudioElement::new_with_src(path) {
        Ok(a) => {
            a.set_preload("auto");
            Ok(a)
        }
        Err(e) => {
            log::error!("[audio] {} load error: {:?}", path, e);
            Err(())
        }
    }
}

fn load_voice(voice: Voice) -> Result<Vec<web::HtmlAudioElement>, ()> {
    (CUE_FIRST..=CUE_LAST)
        .map(|n| load_audio(&voice_sample_path(voice, n)))
        .collect()
}

impl SoundBank {
    pub fn load() -> Result<Self, ()> {
        Ok(Self {
            male: load_voice(Voice::Male)?,
            female: load_voice(Voice::Female)?,
            pop: load_audio(POP_PATH)?,
        })
    }

    fn element(&self, sound: Sound) -> Option<&web::HtmlAudioElement> {
        match sound {
            Sound::Pop => Some(&self.pop),
            Sound::Voice(voice, n) => {
                let set = match voice {
                    Voice::Male => &self.male,
                    Voice::Female => &self.female,
                };
                n.checked_sub(CUE_FIRST).and_then(|i| set.get(i as usize))
            }
        }
    }

    fn all(&self) -> impl Iterator<Item = &web::HtmlAudioElement> {
        self.male
            .iter()
            .chain(self.female.iter())
            .chain(std::iter::once(&self.pop))
    }

    /// Rewind and play; a rejected play is logged and otherwise ignored.
    pub fn play(&self, sound: Sound) {
        let Some(el) = self.element(sound) else {
            log::warn!("[audio] no sample for {:?}", sound);
            return;
        };
        el.set_current_time(0.0);
        match el.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] {:?} play failed: {:?}", sound, e);
                }
            }),
            Err(e) => log::warn!("[audio] {:?} play failed: {:?}", sound, e),
        }
    }

    /// Silent play/pause of every sample inside the start gesture so later
    /// timer-driven plays pass the autoplay policy.
    pub fn prime(&self) {
        for el in self.all() {
            let el = el.clone();
            el.set_volume(0.0);
            let Ok(promise) = el.play() else {
                continue;
            };
            spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    _ = el.pause();
                    el.set_current_time(0.0);
                    el.set_volume(1.0);
                }
            });
        }
    }
}
