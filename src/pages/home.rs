use yew::prelude::*;
use log::info;

use crate::apply::controller::Notice;
use crate::components::floating_apply_button::FloatingApplyButton;
use crate::components::toast::{Toast, ToastMessage};
use crate::components::university_card::UniversityCard;
use crate::data::countries::UNIVERSITIES;
use crate::pages::apply_modal::ApplyModal;

#[function_component(Home)]
pub fn home() -> Html {
    let is_form_open = use_state(|| false);
    let toast = use_state(|| None::<ToastMessage>);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_form = {
        let is_form_open = is_form_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening application form");
            is_form_open.set(true);
        })
    };

    let close_form = {
        let is_form_open = is_form_open.clone();
        Callback::from(move |_: ()| is_form_open.set(false))
    };

    let show_notice = {
        let toast = toast.clone();
        Callback::from(move |notice: Notice| {
            toast.set(Some(ToastMessage::after((*toast).as_ref(), notice)));
        })
    };

    let dismiss_notice = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let open_on_click = {
        let open_form = open_form.clone();
        Callback::from(move |_: MouseEvent| open_form.emit(()))
    };

    html! {
        <div class="home">
            <nav class="top-nav">
                <div class="nav-content">
                    <span class="nav-logo">{ "🎓 H&H Visa Consultant" }</span>
                    <button class="nav-apply-button" onclick={open_on_click.clone()}>
                        { "Apply Now" }
                    </button>
                </div>
            </nav>

            <section class="hero">
                <span class="hero-badge">{ "🎓 #1 Visa Consultant in Pakistan" }</span>
                <h1>
                    { "Study Abroad with" }
                    <br />
                    <span class="hero-highlight">{ "H&H Visa Consultant" }</span>
                </h1>
                <p class="hero-subtitle">
                    { "Your Gateway to World-Class Education in Canada, UK, USA, Germany, Australia & More" }
                </p>
                <div class="hero-stats">
                    <div class="hero-stat">
                        <p class="hero-stat-value">{ "10,000+" }</p>
                        <p class="hero-stat-label">{ "Students Placed" }</p>
                    </div>
                    <div class="hero-stat">
                        <p class="hero-stat-value">{ "98%" }</p>
                        <p class="hero-stat-label">{ "Visa Success Rate" }</p>
                    </div>
                </div>
                <button class="hero-cta" onclick={open_on_click}>
                    { "Start Your Journey Today →" }
                </button>
            </section>

            <section class="universities">
                <h2>{ "Top Universities Waiting for You" }</h2>
                <p>{ "Explore world-class institutions and start your application today" }</p>
                <div class="university-grid">
                    { for UNIVERSITIES.iter().map(|uni| html! {
                        <UniversityCard
                            key={uni.university_name}
                            uni={uni.clone()}
                            on_apply={open_form.clone()}
                        />
                    }) }
                </div>
            </section>

            <FloatingApplyButton on_click={open_form.clone()} />
            <ApplyModal
                is_open={*is_form_open}
                on_close={close_form}
                on_notice={show_notice}
            />
            <Toast message={(*toast).clone()} on_dismiss={dismiss_notice} />
        </div>
    }
}
