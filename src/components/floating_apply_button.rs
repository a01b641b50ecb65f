use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingApplyButtonProps {
    pub on_click: Callback<()>,
}

#[function_component(FloatingApplyButton)]
pub fn floating_apply_button(props: &FloatingApplyButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_click.emit(());
        })
    };

    html! {
        <button class="floating-apply-button" {onclick}>
            { "Apply Now Fast" }
            <span class="floating-apply-arrow">{ "→" }</span>
        </button>
    }
}
