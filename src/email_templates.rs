//! Bodies of the two messages sent for every subscription.
//!
//! Rendering is pure so the output can be checked without a relay.

use chrono::{DateTime, Local};

pub const WELCOME_SUBJECT: &str = "Welcome to Feel Mitra Newsletter!";
pub const ADMIN_NOTICE_SUBJECT: &str = "New Newsletter Subscription";

const WELCOME_HTML: &str = r#"<div style="font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto; background-color: #FAFAFA; padding: 40px 20px;">
  <div style="background: white; border-radius: 16px; padding: 40px 32px; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.05);">
    <div style="text-align: center; margin-bottom: 32px;">
      <img src="https://feelmitra.in/logo.png" alt="Feel Mitra Logo" style="width: 120px; height: auto;">
    </div>
    
    <h2 style="color: #EA580C; text-align: center; font-size: 24px; font-weight: 600; margin: 0 0 24px 0;">Welcome to Feel Mitra! 🎉</h2>
    
    <p style="color: #334155; line-height: 1.6; font-size: 16px; margin-bottom: 24px;">We're excited to have you join our community focused on emotional wellness and personal growth.</p>
    
    <div style="background: linear-gradient(to right, #EA580C, #F97316); border-radius: 12px; padding: 24px; color: white; margin-bottom: 32px;">
      <h3 style="margin: 0 0 16px 0; font-size: 18px;">What's in store for you:</h3>
      <ul style="list-style: none; padding: 0; margin: 0;">
        <li style="margin-bottom: 12px; display: flex; align-items: center;">
          <span style="margin-right: 12px;">✨</span>
          Weekly wellness tips & mindfulness practices
        </li>
        <li style="margin-bottom: 12px; display: flex; align-items: center;">
          <span style="margin-right: 12px;">🧘</span>
          Exclusive guided meditation sessions
        </li>
        <li style="margin-bottom: 12px; display: flex; align-items: center;">
          <span style="margin-right: 12px;">🎯</span>
          Platform updates & new features
        </li>
        <li style="display: flex; align-items: center;">
          <span style="margin-right: 12px;">🎁</span>
          Special community events & offers
        </li>
      </ul>
    </div>
    
    <div style="background-color: #FFF7ED; border-radius: 12px; padding: 20px; margin-bottom: 32px;">
      <p style="color: #EA580C; margin: 0; display: flex; align-items: center;">
        <span style="margin-right: 12px;">💡</span>
        <span>Pro Tip: Add <strong>feel@feelmitra.in</strong> to your contacts to never miss an update!</span>
      </p>
    </div>
    
    <p style="color: #334155; line-height: 1.6; text-align: center; margin-bottom: 32px;">Your journey to better emotional well-being starts now. We're here to support you at every step.</p>
    
    <div style="text-align: center; padding-top: 24px; border-top: 1px solid #E2E8F0;">
      <p style="color: #64748B; margin: 0 0 8px 0;">With care,</p>
      <p style="color: #EA580C; font-weight: 600; margin: 0;">The Feel Mitra Team</p>
    </div>
  </div>
</div>
"#;

const WELCOME_TEXT: &str = "Welcome to Feel Mitra!

We're excited to have you join our community focused on emotional wellness and personal growth.

What's in store for you:
- Weekly wellness tips & mindfulness practices
- Exclusive guided meditation sessions
- Platform updates & new features
- Special community events & offers

Pro Tip: Add feel@feelmitra.in to your contacts to never miss an update!

Your journey to better emotional well-being starts now. We're here to support you at every step.

With care,
The Feel Mitra Team
";

/// What the admin notice needs to know about a subscription.
#[derive(Debug, Clone)]
pub struct AdminNoticeArgs<'a> {
    pub subscriber_email: &'a str,
    pub subscribed_at: DateTime<Local>,
}

pub fn render_welcome_email() -> String {
    WELCOME_HTML.to_string()
}

pub fn render_welcome_text() -> String {
    WELCOME_TEXT.to_string()
}

pub fn render_admin_notice(args: &AdminNoticeArgs<'_>) -> String {
    format!(
        r#"<div style="font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 600px; margin: 0 auto; background-color: #FAFAFA; padding: 40px 20px;">
  <div style="background: white; border-radius: 16px; padding: 40px 32px; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.05);">
    <div style="text-align: center; margin-bottom: 32px;">
      <img src="https://feelmitra.in/logo.png" alt="Feel Mitra Logo" style="width: 100px; height: auto;">
    </div>
    <div style="background: linear-gradient(to right, #EA580C, #F97316); border-radius: 12px; padding: 24px; color: white; margin-bottom: 32px;">
      <h2 style="margin: 0 0 16px 0; font-size: 20px; text-align: center;">New Newsletter Subscriber! 🎉</h2>
      <div style="background: rgba(255, 255, 255, 0.1); border-radius: 8px; padding: 16px;">
        <p style="margin: 0 0 8px 0;"><strong>Email:</strong> {email}</p>
        <p style="margin: 0;"><strong>Date:</strong> {date}</p>
      </div>
    </div>
    <div style="background-color: #FFF7ED; border-radius: 12px; padding: 20px; text-align: center;">
      <p style="color: #EA580C; margin: 0;">
        <span style="display: block; font-size: 24px; margin-bottom: 8px;">✅</span>
        Subscriber successfully added to the newsletter database
      </p>
    </div>
  </div>
</div>
"#,
        email = htmlescape::encode_minimal(args.subscriber_email),
        date = format_timestamp(args.subscribed_at),
    )
}

pub fn render_admin_notice_text(args: &AdminNoticeArgs<'_>) -> String {
    format!(
        "New Newsletter Subscriber!\n\nEmail: {}\nDate: {}\n",
        args.subscriber_email,
        format_timestamp(args.subscribed_at)
    )
}

/// `10/19/2026, 3:04:05 PM`, in the server's local time zone.
pub fn format_timestamp(at: DateTime<Local>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
