//! The entry form shared by the create and edit pages.

use maud::{Markup, html};

use crate::{
    endpoints,
    entry::{EntryFormData, EntryId},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
};

/// Where the entry form submits to.
pub(super) enum FormAction {
    /// POST to the create endpoint.
    Create,
    /// PUT to the update endpoint for the entry being edited.
    Update(EntryId),
}

/// Render the entry form with the given `values` pre-filled.
///
/// `error_message` is shown above the submit button when non-empty, so a
/// failed submission can re-prompt with the user's input intact.
pub(super) fn entry_form_view(
    action: &FormAction,
    values: &EntryFormData,
    submit_label: &str,
    error_message: &str,
) -> Markup {
    let (post_endpoint, put_endpoint) = match action {
        FormAction::Create => (Some(endpoints::POST_ENTRY.to_owned()), None),
        FormAction::Update(entry_id) => (
            None,
            Some(endpoints::format_endpoint(endpoints::PUT_ENTRY, *entry_id)),
        ),
    };

    html! {
        form
            hx-post=[post_endpoint]
            hx-put=[put_endpoint]
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                input
                    id="date"
                    type="date"
                    name="date"
                    value=(values.date)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                input
                    id="category"
                    type="text"
                    name="category"
                    placeholder="Groceries"
                    value=(values.category)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount (yen)" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    min="0"
                    step="1"
                    placeholder="2000"
                    value=(values.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="memo" class=(FORM_LABEL_STYLE) { "Memo" }

                input
                    id="memo"
                    type="text"
                    name="memo"
                    value=(values.memo)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    label class=(FORM_RADIO_LABEL_STYLE)
                    {
                        input
                            type="radio"
                            name="type"
                            value="income"
                            required
                            checked[values.entry_type == "income"]
                            class=(FORM_RADIO_INPUT_STYLE);

                        "Income"
                    }

                    label class=(FORM_RADIO_LABEL_STYLE)
                    {
                        input
                            type="radio"
                            name="type"
                            value="expense"
                            required
                            checked[values.entry_type == "expense"]
                            class=(FORM_RADIO_INPUT_STYLE);

                        "Expense"
                    }
                }
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { (submit_label) }
        }
    }
}
