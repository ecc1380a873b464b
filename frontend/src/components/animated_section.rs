use yew::prelude::*;

use crate::visibility::{use_visibility, ObserverOverrides};

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Milliseconds to wait before the fade starts once revealed.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub observer: ObserverOverrides,
}

pub fn reveal_style(delay: u32) -> String {
    format!("transition-delay: {}ms;", delay)
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let (node, state) = use_visibility(props.observer.clone());

    html! {
        <div
            ref={node}
            class={classes!("animated-section", state.class(), props.class.clone())}
            style={reveal_style(props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_is_rendered_in_milliseconds() {
        assert_eq!(reveal_style(0), "transition-delay: 0ms;");
        assert_eq!(reveal_style(300), "transition-delay: 300ms;");
    }
}
