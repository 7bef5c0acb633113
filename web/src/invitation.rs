use envelope_core as scene;
use envelope_core::{
    Artwork, Command, Commands, InviteConfig, OpenTrigger, RevealPhase, RevealSequencer,
    TimerKind,
};
use yew::prelude::*;

use crate::audio::MusicPlayer;
use crate::decorations::{Particles, Sparkles};
use crate::timers::TimerSlots;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Open(OpenTrigger),
    Fire(TimerKind),
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct InvitationProps {
    #[prop_or_default]
    pub(crate) config: InviteConfig,
}

fn envelope_class(phase: RevealPhase) -> Classes {
    classes!(
        "envelope",
        match phase {
            RevealPhase::Closed => classes!("closed"),
            RevealPhase::Opening => classes!("opened"),
            RevealPhase::Revealed => classes!("opened", "revealed"),
        }
    )
}

fn hint_class(phase: RevealPhase) -> Classes {
    classes!("click-hint", phase.is_opened().then_some("dismissed"))
}

fn is_open_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    artwork: Artwork,
}

#[function_component(InvitationCard)]
fn invitation_card(props: &CardProps) -> Html {
    let Artwork {
        src,
        alt,
        width,
        height,
    } = props.artwork.clone();

    html! {
        <div class="invitation-card" style={scene::CARD_ENTRANCE.style()}>
            <div class="invitation-frame">
                <img {src} {alt} width={width.to_string()} height={height.to_string()}/>
            </div>
            <Sparkles/>
        </div>
    }
}

/// The whole page: envelope, invitation card and decorations.
///
/// State transitions are delegated to [`RevealSequencer`]; this component
/// owns the browser resources the sequencer asks for.
pub(crate) struct InvitationReveal {
    sequencer: RevealSequencer,
    timers: TimerSlots,
    music: MusicPlayer,
}

impl InvitationReveal {
    fn perform(&mut self, ctx: &Context<Self>, commands: Commands) {
        for command in commands {
            match command {
                Command::Schedule { timer, after } => {
                    let link = ctx.link().clone();
                    self.timers
                        .arm(timer, after, move || link.send_message(Msg::Fire(timer)));
                }
                Command::Cancel(timer) => {
                    if self.timers.cancel(timer) {
                        log::trace!("{:?} timer cancelled", timer);
                    }
                }
                Command::StartAudio => self.music.start(&ctx.props().config.audio),
            }
        }
    }
}

impl Component for InvitationReveal {
    type Message = Msg;
    type Properties = InvitationProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut this = Self {
            sequencer: RevealSequencer::new(ctx.props().config.timing),
            timers: Default::default(),
            music: Default::default(),
        };
        match this.sequencer.mount() {
            Ok(commands) => this.perform(ctx, commands),
            Err(err) => log::error!("failed to mount: {}", err),
        }
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let step = match msg {
            Msg::Open(trigger) => self.sequencer.open(trigger),
            Msg::Fire(timer) => {
                self.timers.release(timer);
                self.sequencer.fire(timer)
            }
        };

        match step {
            Ok(step) => {
                let updated = step.has_update();
                self.perform(ctx, step.commands);
                updated
            }
            Err(err) => {
                log::error!("{:?} rejected: {}", msg, err);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let InviteConfig { artwork, hint, .. } = &ctx.props().config;
        let phase = self.sequencer.phase();

        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Open(OpenTrigger::Pointer));
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            is_open_key(&e.key()).then(|| {
                e.prevent_default();
                Msg::Open(OpenTrigger::Keyboard)
            })
        });

        html! {
            <div class="invite-page">
                <div class="invite-stage">
                    <div
                        class={envelope_class(phase)}
                        role="button"
                        tabindex="0"
                        aria-label={hint.clone()}
                        aria-expanded={phase.is_opened().to_string()}
                        {onclick}
                        {onkeydown}
                    >
                        <div class="envelope-body">
                            <div class="envelope-back"/>
                            <div class="envelope-flap" style={scene::FLAP.style(phase)}/>
                            <div class="envelope-seal" style={scene::SEAL.style(phase)}>
                                <div class="seal-core"/>
                            </div>
                        </div>
                        <div class={hint_class(phase)} style={scene::HINT_ENTRANCE.style()}>
                            {hint.clone()}
                        </div>
                    </div>
                    if phase.is_revealed() {
                        <InvitationCard artwork={artwork.clone()}/>
                    }
                    <Particles/>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        for command in self.sequencer.unmount() {
            if let Command::Cancel(timer) = command {
                self.timers.cancel(timer);
            }
        }
        if self.music.is_loaded() {
            log::debug!("stopping music");
        }
        self.music.stop();
    }
}
