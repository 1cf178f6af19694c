use yew::prelude::*;
use yew_hooks::prelude::*;
use stylist::yew::styled_component;

use crate::carousel::{CarouselAction, CarouselState};
use crate::config::{GalleryImage, AUTO_ADVANCE_MS};

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: &'static [GalleryImage],
}

#[styled_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let state = use_reducer(|| CarouselState::new(props.images.len()));

    {
        let state = state.clone();
        use_interval(
            move || {
                state.dispatch(CarouselAction::Advance);
            },
            AUTO_ADVANCE_MS,
        );
    }

    let wrapper = css!(
        r#"
        width: 100vw;
        height: 60vh;
        display: flex;
        align-items: center;
        justify-content: center;
        position: relative;
        overflow: visible;
        "#
    );
    let inner = css!(
        r#"
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%);
        width: 100vw;
        height: 60vh;
        pointer-events: none;
        perspective: 1200px;
        "#
    );

    html! {
        <div class={wrapper}>
            <div class={inner}>
                { for props.images.iter().enumerate().map(|(idx, image)| {
                    let style = match state.layout(idx) {
                        Some(layout) => layout.style(),
                        None => "display: none;".to_string(),
                    };
                    html! {
                        <img
                            key={image.src}
                            class="carousel-image"
                            src={image.src}
                            alt={image.alt}
                            draggable="false"
                            {style}
                        />
                    }
                }) }
            </div>
        </div>
    }
}
