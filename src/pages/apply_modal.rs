use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::info;

use crate::apply::controller::{FormController, Notice};
use crate::apply::destinations::destination_options;
use crate::apply::draft::{DegreeLevel, TextField, Urgency, VisaType};
use crate::apply::step::Step;
use crate::apply::submit::{send_application, SubmissionOutcome};

#[derive(Properties, PartialEq)]
pub struct ApplyModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_notice: Callback<Notice>,
}

pub enum ApplyModalMsg {
    SetText(TextField, String),
    SelectVisaType(Option<VisaType>),
    SelectCountry(String),
    SetUrgency(Option<Urgency>),
    SetDegreeLevel(Option<DegreeLevel>),
    Next,
    Back,
    Submit,
    Submitted(SubmissionOutcome),
    Close,
}

pub struct ApplyModal {
    form: FormController,
}

impl Component for ApplyModal {
    type Message = ApplyModalMsg;
    type Properties = ApplyModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: FormController::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ApplyModalMsg::SetText(field, value) => {
                self.form.draft.set_text(field, value);
                true
            }
            ApplyModalMsg::SelectVisaType(visa_type) => {
                self.form.draft.select_visa_type(visa_type);
                true
            }
            ApplyModalMsg::SelectCountry(country) => {
                self.form.draft.select_country(country);
                true
            }
            ApplyModalMsg::SetUrgency(urgency) => {
                self.form.draft.urgency = urgency;
                true
            }
            ApplyModalMsg::SetDegreeLevel(degree_level) => {
                self.form.draft.degree_level = degree_level;
                true
            }
            ApplyModalMsg::Next => {
                if let Err(e) = self.form.next_step() {
                    ctx.props().on_notice.emit(Notice::error(e.to_string()));
                }
                true
            }
            ApplyModalMsg::Back => {
                self.form.previous_step();
                true
            }
            ApplyModalMsg::Submit => {
                match self.form.begin_submit() {
                    Ok(payload) => {
                        ctx.link().send_future(async move {
                            ApplyModalMsg::Submitted(send_application(&payload).await)
                        });
                    }
                    Err(e) => ctx.props().on_notice.emit(Notice::error(e.to_string())),
                }
                true
            }
            ApplyModalMsg::Submitted(outcome) => {
                let settled = self.form.finish_submit(&outcome);
                ctx.props().on_notice.emit(settled.notice);
                if settled.close_form {
                    ctx.props().on_close.emit(());
                }
                true
            }
            ApplyModalMsg::Close => {
                // A sent request always runs to completion.
                if self.form.busy {
                    return false;
                }
                info!("Application form dismissed");
                self.form.reset();
                ctx.props().on_close.emit(());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| ApplyModalMsg::Close);
        let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="apply-overlay" onclick={close.clone()}>
                <style>
                    {r#"
                        .apply-overlay {
                            position: fixed;
                            inset: 0;
                            z-index: 50;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            padding: 1rem;
                            background: rgba(0, 0, 0, 0.6);
                        }
                        .apply-dialog {
                            background: #fff;
                            border-radius: 24px;
                            max-width: 48rem;
                            width: 100%;
                            max-height: 90vh;
                            overflow-y: auto;
                        }
                        .apply-header {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            padding: 1.5rem 2rem;
                            border-bottom: 1px solid #e5e7eb;
                        }
                        .apply-body {
                            padding: 2rem;
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                        }
                        .apply-body input, .apply-body select, .apply-body textarea {
                            width: 100%;
                            padding: 0.75rem 1rem;
                            border: 1px solid #e5e7eb;
                            border-radius: 12px;
                            background: #f9fafb;
                        }
                        .apply-actions {
                            display: flex;
                            gap: 1rem;
                        }
                        .apply-primary {
                            flex: 1;
                            background: #EE7A36;
                            color: #fff;
                            font-weight: 700;
                            padding: 1rem;
                            border: none;
                            border-radius: 12px;
                            cursor: pointer;
                        }
                        .apply-primary:disabled {
                            opacity: 0.6;
                            cursor: wait;
                        }
                    "#}
                </style>
                <div class="apply-dialog" onclick={keep_open}>
                    <div class="apply-header">
                        <div>
                            <h2>{ "Apply Now" }</h2>
                            <p>{ format!("Step {} of 2 · Get Free Consultation & Visa Assistance", self.form.step.number()) }</p>
                        </div>
                        <button class="apply-close" onclick={close} disabled={self.form.busy}>{ "✕" }</button>
                    </div>
                    <div class="apply-body">
                        {
                            match self.form.step {
                                Step::SelectCategory => self.view_category(ctx),
                                Step::CollectDetails => self.view_details(ctx),
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl ApplyModal {
    fn view_category(&self, ctx: &Context<Self>) -> Html {
        let selected = self.form.draft.visa_type;

        html! {
            <>
                <label>{ "What kind of visa are you after? *" }</label>
                <div class="apply-visa-types">
                    { for VisaType::ALL.into_iter().map(|visa_type| html! {
                        <label class="apply-visa-type">
                            <input
                                type="radio"
                                name="visaType"
                                value={visa_type.as_str()}
                                checked={selected == Some(visa_type)}
                                onchange={ctx.link().callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    ApplyModalMsg::SelectVisaType(VisaType::parse(&input.value()))
                                })}
                            />
                            <span>{ visa_type.label() }</span>
                        </label>
                    }) }
                </div>
                <div class="apply-actions">
                    <button class="apply-primary" onclick={ctx.link().callback(|_| ApplyModalMsg::Next)}>
                        { "Next" }
                    </button>
                </div>
            </>
        }
    }

    fn text_input(&self, ctx: &Context<Self>, field: TextField, label: &str, input_type: &str, placeholder: &str) -> Html {
        let draft = &self.form.draft;
        let value = match field {
            TextField::Name => &draft.name,
            TextField::Email => &draft.email,
            TextField::Phone => &draft.phone,
            TextField::Address => &draft.address,
            TextField::OtherCountry => &draft.other_country,
            TextField::AdditionalNotes => &draft.additional_notes,
        };

        html! {
            <div>
                <label>{ label }</label>
                <input
                    type={input_type.to_string()}
                    value={value.clone()}
                    placeholder={placeholder.to_string()}
                    disabled={self.form.busy}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ApplyModalMsg::SetText(field, input.value())
                    })}
                />
            </div>
        }
    }

    fn text_area(&self, ctx: &Context<Self>, field: TextField, label: &str, rows: u32, placeholder: &str) -> Html {
        let value = match field {
            TextField::Address => self.form.draft.address.clone(),
            _ => self.form.draft.additional_notes.clone(),
        };

        html! {
            <div>
                <label>{ label }</label>
                <textarea
                    rows={rows.to_string()}
                    value={value}
                    placeholder={placeholder.to_string()}
                    disabled={self.form.busy}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ApplyModalMsg::SetText(field, input.value())
                    })}
                />
            </div>
        }
    }

    fn view_details(&self, ctx: &Context<Self>) -> Html {
        let draft = &self.form.draft;
        let busy = self.form.busy;
        let options = destination_options(draft.visa_type);

        html! {
            <>
                { self.text_input(ctx, TextField::Name, "Full Name *", "text", "John Doe") }
                { self.text_input(ctx, TextField::Phone, "Phone Number *", "tel", "+92 300 1234567") }
                { self.text_input(ctx, TextField::Email, "Email Address *", "email", "john@example.com") }
                { self.text_area(ctx, TextField::Address, "Full Address *", 3, "House no, Street, City, Province") }

                <div>
                    <label>{ "Where do you want to go? *" }</label>
                    <select
                        disabled={busy}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ApplyModalMsg::SelectCountry(select.value())
                        })}
                    >
                        <option value="" selected={draft.desired_country.is_empty()}>{ "Select Country" }</option>
                        { for options.iter().map(|option| html! {
                            <option
                                value={option.value()}
                                selected={draft.desired_country == option.value()}
                            >
                                { option.label() }
                            </option>
                        }) }
                    </select>
                </div>
                if draft.wants_other_country() {
                    { self.text_input(ctx, TextField::OtherCountry, "Which country? *", "text", "e.g. Japan") }
                }

                if draft.visa_type == Some(VisaType::Study) {
                    <div>
                        <label>{ "Degree Level *" }</label>
                        <select
                            disabled={busy}
                            onchange={ctx.link().callback(|e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                ApplyModalMsg::SetDegreeLevel(DegreeLevel::parse(&select.value()))
                            })}
                        >
                            <option value="" selected={draft.degree_level.is_none()}>{ "Select degree level" }</option>
                            { for DegreeLevel::ALL.into_iter().map(|level| html! {
                                <option value={level.as_str()} selected={draft.degree_level == Some(level)}>
                                    { level.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                }

                <div>
                    <label>{ "How soon do you want to go? *" }</label>
                    <select
                        disabled={busy}
                        onchange={ctx.link().callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            ApplyModalMsg::SetUrgency(Urgency::parse(&select.value()))
                        })}
                    >
                        <option value="" selected={draft.urgency.is_none()}>{ "Select timeline" }</option>
                        { for Urgency::ALL.into_iter().map(|urgency| html! {
                            <option value={urgency.as_str()} selected={draft.urgency == Some(urgency)}>
                                { urgency.label() }
                            </option>
                        }) }
                    </select>
                </div>

                { self.text_area(ctx, TextField::AdditionalNotes, "Additional Notes (Optional)", 4, "Any specific university, budget, or questions...") }

                <div class="apply-actions">
                    <button
                        class="apply-secondary"
                        disabled={busy}
                        onclick={ctx.link().callback(|_| ApplyModalMsg::Back)}
                    >
                        { "Back" }
                    </button>
                    <button
                        class="apply-primary"
                        disabled={busy}
                        onclick={ctx.link().callback(|_| ApplyModalMsg::Submit)}
                    >
                        { if busy { "Submitting..." } else { "Submit Application – It's Free!" } }
                    </button>
                </div>
            </>
        }
    }
}
