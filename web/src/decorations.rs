use envelope_core as scene;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct SparkleProps {
    pub(crate) sparkle: scene::Sparkle,
}

#[function_component(SparkleView)]
pub(crate) fn sparkle_view(props: &SparkleProps) -> Html {
    let scene::Sparkle {
        corner,
        tint,
        size_px,
        motion,
    } = props.sparkle;

    let class = classes!("sparkle", "ambient", corner.class(), tint.class());
    let style = format!(
        "width: {size_px}px; height: {size_px}px; {}",
        motion.style()
    );

    html! { <div {class} {style}/> }
}

#[function_component(Sparkles)]
pub(crate) fn sparkles() -> Html {
    html! {
        <>
            { for scene::SPARKLES.iter().map(|&sparkle| html! { <SparkleView {sparkle}/> }) }
        </>
    }
}

/// Background layer of floating dots. Ignores the pointer.
#[function_component(Particles)]
pub(crate) fn particles() -> Html {
    html! {
        <div class="particles" aria-hidden="true">
            {
                for scene::particles().map(|particle| html! {
                    <div
                        key={particle.index}
                        class={classes!("particle", "ambient")}
                        style={particle.style()}
                    />
                })
            }
        </div>
    }
}
