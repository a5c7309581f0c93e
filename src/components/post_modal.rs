use yew::prelude::*;

use crate::state::Post;

#[derive(Properties, PartialEq)]
pub struct PostModalProps {
    pub post: &'static Post,
    pub on_close: Callback<MouseEvent>,
}

/// Detail view for the selected post. Rendered only while a post is open;
/// the body scroll lock is handled by the page, not here.
#[function_component(PostModal)]
pub fn post_modal(props: &PostModalProps) -> Html {
    let post = props.post;
    html! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <div class="modal-header">
                    <h2>{post.title}</h2>
                    <button class="modal-close" onclick={props.on_close.clone()}>
                        {"←"}
                    </button>
                </div>
                <img src={post.thumbnail} alt={post.title} class="modal-image" />
                <p class="modal-content">{post.content}</p>
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    z-index: 60;
                }
                .modal-card {
                    background: #ffffff;
                    border-radius: 12px;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.3);
                    max-width: 42rem;
                    width: 100%;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 1.5rem;
                }
                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .modal-header h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.4rem;
                    color: #6b7280;
                    cursor: pointer;
                }
                .modal-close:hover {
                    color: #374151;
                }
                .modal-image {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    border-radius: 8px;
                    margin-bottom: 1rem;
                }
                .modal-content {
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
