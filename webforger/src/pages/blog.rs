use yew::prelude::*;

use crate::effects::motion::Direction;
use crate::effects::squares::Squares;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="blog-page">
            <Squares
                speed={0.5}
                square_size={35.0}
                direction={Direction::Right}
                border_color="#4100b3"
                hover_fill_color="#460047"
            />
            <div class="blog-title">
                <div>{"Blog"}</div>
                <div class="blog-title-sub">{"Coming soon!"}</div>
            </div>
            <style>
                {r#"
                .blog-page {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    background: #060010;
                    overflow: hidden;
                }
                .blog-title {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-size: 3rem;
                    font-weight: bold;
                    pointer-events: none;
                }
                .blog-title-sub {
                    margin-top: 0.75rem;
                    font-size: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
