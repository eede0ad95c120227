//! Fixed per-intent phrasing wrapped around the top article.

use supportdb_core::types::Intent;

pub const NO_MATCH_REPLY: &str = "I'm sorry, I couldn't find specific information about that in Novo's knowledge base. \
Would you mind rephrasing your question or asking something more specific about Novo's platform? \
I'm here to help you find what you need.";

pub fn intro(intent: Intent) -> &'static str {
    match intent {
        Intent::PasswordReset => "I'd be happy to help you with resetting your password! ",
        Intent::AccountUpdate => "I'd love to show you how to update your account information. ",
        Intent::Integration => "Great question about integrations! ",
        Intent::Security => "Security is definitely important, and I'm glad you asked about this. ",
        Intent::Billing => "I understand you have a question about billing. ",
        Intent::Troubleshooting => "I'm sorry you're experiencing an issue. Let me help you resolve that. ",
        Intent::Compliance => "Regarding your compliance question, here's the information from our resources. ",
        Intent::General => "Thank you for your question! ",
    }
}

pub fn conclusion(intent: Intent) -> &'static str {
    match intent {
        Intent::PasswordReset => " If you have any trouble with these steps, Novo's support team is always available to help at help@novo.com.",
        Intent::AccountUpdate => " These changes will take effect immediately, and you can make updates anytime you need to.",
        Intent::Integration => " Once connected, the integration will save you time and help streamline your workflow.",
        Intent::Security => " Taking these security measures will help keep your Novo account protected.",
        Intent::Billing => " Novo aims to keep their pricing transparent and straightforward for all customers.",
        Intent::Troubleshooting => " If this solution doesn't resolve your issue, Novo's support team is ready to help with more personalized assistance.",
        Intent::Compliance => " For more detailed compliance information, please consult our full compliance documentation or contact our compliance team at compliance@novo.com.",
        Intent::General => " I hope this information helps! Let me know if you have any other questions.",
    }
}
