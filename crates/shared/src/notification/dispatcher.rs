use crate::{
    abstract_trait::{DynEmailService, DynSmsProvider},
    domain::requests::{RiderApplicationRequest, VendorNotificationRequest, VendorStatus},
    errors::ServiceError,
    model::{Order, OrderStatus},
    utils::EmailTemplateData,
};
use tracing::{error, info, warn};

/// Fans a domain event out to SMS and email recipients. Each channel is an
/// independent failure domain: a dead SMS provider never blocks the email
/// to the admin, and neither ever rolls back the write that triggered it.
pub struct NotificationDispatcher {
    sms: DynSmsProvider,
    email: DynEmailService,
    admin_email: String,
    admin_phone: Option<String>,
}

impl NotificationDispatcher {
    pub fn new(
        sms: DynSmsProvider,
        email: DynEmailService,
        admin_email: String,
        admin_phone: Option<String>,
    ) -> Self {
        Self {
            sms,
            email,
            admin_email,
            admin_phone,
        }
    }

    pub async fn send_sms(&self, to: &str, message: &str) -> Result<(), ServiceError> {
        self.sms.send(to, message).await
    }

    /// Admin copy of an operational SMS. Skipped with a warning when no
    /// admin phone is configured.
    pub async fn send_admin_sms(&self, message: &str) -> Result<(), ServiceError> {
        match &self.admin_phone {
            Some(phone) => self.sms.send(phone, message).await,
            None => {
                warn!("⚠️ ADMIN_PHONE not configured, skipping admin SMS copy");
                Ok(())
            }
        }
    }

    /// Order status fan-out: SMS to the customer, email to the admin.
    /// Failures are logged per channel and never surface to the caller;
    /// the order update has already been committed.
    pub async fn order_status_changed(&self, order: &Order, customer_phone: Option<&str>) {
        let message = status_sms_copy(order);

        match customer_phone {
            Some(phone) => {
                if let Err(e) = self.sms.send(phone, &message).await {
                    error!("❌ Status SMS for order {} failed: {e}", order.order_id);
                }
            }
            None => {
                warn!(
                    "⚠️ No phone on record for order {}, skipping status SMS",
                    order.order_id
                );
            }
        }

        let data = EmailTemplateData {
            title: format!("Order {} is now {}", order.order_id, order.status),
            message: message.clone(),
            button: "View order".to_string(),
            link: format!("https://quickbite.app/admin/orders/{}", order.order_id),
        };

        if let Err(e) = self
            .email
            .send(&self.admin_email, &data.title, &data)
            .await
        {
            error!("❌ Admin email for order {} failed: {e}", order.order_id);
        } else {
            info!("📧 Admin notified of order {} status change", order.order_id);
        }
    }

    /// Payment fan-out mirrors the status fan-out: best effort, never blocking.
    pub async fn order_paid(&self, order: &Order, customer_phone: Option<&str>) {
        if let Some(phone) = customer_phone {
            let message = format!(
                "Payment of {} received for your QuickBite order. Thank you!",
                order.total
            );
            if let Err(e) = self.sms.send(phone, &message).await {
                error!("❌ Payment SMS for order {} failed: {e}", order.order_id);
            }
        }
    }

    /// Rider intake sends two emails: an acknowledgement to the applicant
    /// and an alert to the admin. Both are attempted even if the first
    /// fails; the endpoint reports failure when either did.
    pub async fn rider_application(
        &self,
        req: &RiderApplicationRequest,
    ) -> Result<(), ServiceError> {
        let ack = EmailTemplateData {
            title: "We received your rider application".to_string(),
            message: format!(
                "Hi {}, thanks for applying to ride with QuickBite. \
                 Our team will review your application and get back to you within 3 business days.",
                req.full_name
            ),
            button: "Track your application".to_string(),
            link: "https://quickbite.app/riders".to_string(),
        };

        let alert = EmailTemplateData {
            title: "New rider application".to_string(),
            message: format!(
                "{} ({}, {}) applied as a rider. Address: {}. License: {}. Motorcycle: {}.",
                req.full_name,
                req.email,
                req.phone,
                req.address,
                req.license_number,
                req.motorcycle_model
            ),
            button: "Review application".to_string(),
            link: "https://quickbite.app/admin/riders".to_string(),
        };

        let ack_result = self.email.send(&req.email, &ack.title, &ack).await;
        let alert_result = self
            .email
            .send(&self.admin_email, &alert.title, &alert)
            .await;

        if let Err(e) = &ack_result {
            error!("❌ Rider acknowledgement email failed: {e}");
        }
        if let Err(e) = &alert_result {
            error!("❌ Rider admin alert email failed: {e}");
        }

        ack_result.and(alert_result)
    }

    /// Vendor onboarding notification with status-dependent copy, sent to
    /// the vendor with a copy to the admin.
    pub async fn vendor_status(&self, req: &VendorNotificationRequest) -> Result<(), ServiceError> {
        let (title, message, button) = vendor_email_copy(req);

        let data = EmailTemplateData {
            title,
            message,
            button,
            link: "https://quickbite.app/vendor/dashboard".to_string(),
        };

        let vendor_result = self
            .email
            .send(&req.vendor_email, &data.title, &data)
            .await;

        if let Err(e) = self
            .email
            .send(&self.admin_email, &data.title, &data)
            .await
        {
            error!("❌ Vendor notification admin copy failed: {e}");
        }

        vendor_result
    }
}

fn status_sms_copy(order: &Order) -> String {
    match order.status {
        OrderStatus::Pending => format!(
            "Your QuickBite order has been received and is awaiting confirmation. Total: {}.",
            order.total
        ),
        OrderStatus::Confirmed => {
            "Your QuickBite order has been confirmed by the restaurant.".to_string()
        }
        OrderStatus::Preparing => "The kitchen is preparing your QuickBite order now.".to_string(),
        OrderStatus::OutForDelivery => match &order.rider_code {
            Some(code) => format!(
                "Your QuickBite order is out for delivery! Your rider code is {code}."
            ),
            None => "Your QuickBite order is out for delivery!".to_string(),
        },
        OrderStatus::Delivered => {
            "Your QuickBite order has been delivered. Enjoy your meal!".to_string()
        }
        OrderStatus::Cancelled => "Your QuickBite order has been cancelled.".to_string(),
    }
}

fn vendor_email_copy(req: &VendorNotificationRequest) -> (String, String, String) {
    match req.status {
        Some(VendorStatus::Approved) => (
            "Your restaurant is live on QuickBite".to_string(),
            format!(
                "Congratulations {}! {} has been approved and is now visible to customers.",
                req.vendor_name, req.business_name
            ),
            "Open vendor dashboard".to_string(),
        ),
        Some(VendorStatus::Rejected) => (
            "Update on your QuickBite application".to_string(),
            format!(
                "Hi {}, unfortunately we could not approve {} at this time. \
                 Reply to this email if you believe this is a mistake.",
                req.vendor_name, req.business_name
            ),
            "Contact support".to_string(),
        ),
        Some(VendorStatus::Pending) | None => (
            "We received your vendor application".to_string(),
            format!(
                "Hi {}, your application for {} is under review. \
                 We will notify you as soon as a decision is made.",
                req.vendor_name, req.business_name
            ),
            "Check status".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentMethod;
    use chrono::Utc;
    use uuid::Uuid;

    fn order_with_status(status: OrderStatus, rider_code: Option<&str>) -> Order {
        Order {
            order_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            branch_id: Uuid::new_v4(),
            status,
            paid: false,
            payment_method: PaymentMethod::Card,
            total: 4200,
            delivery_fee: 500,
            rider_code: rider_code.map(String::from),
            feedback_rating: None,
            feedback_comment: None,
            feedback_at: None,
            version: 1,
            created_at: Some(Utc::now().naive_utc()),
            updated_at: Some(Utc::now().naive_utc()),
        }
    }

    #[test]
    fn out_for_delivery_sms_includes_rider_code() {
        let order = order_with_status(OrderStatus::OutForDelivery, Some("K7M3XQ"));
        assert!(status_sms_copy(&order).contains("K7M3XQ"));
    }

    #[test]
    fn pending_sms_includes_total() {
        let order = order_with_status(OrderStatus::Pending, None);
        assert!(status_sms_copy(&order).contains("4200"));
    }

    #[test]
    fn vendor_copy_tracks_status() {
        let mut req = VendorNotificationRequest {
            vendor_email: "v@example.com".into(),
            vendor_name: "Ada".into(),
            business_name: "Mama Put Kitchen".into(),
            status: Some(VendorStatus::Approved),
        };

        let (title, _, _) = vendor_email_copy(&req);
        assert!(title.contains("live"));

        req.status = Some(VendorStatus::Rejected);
        let (_, message, _) = vendor_email_copy(&req);
        assert!(message.contains("could not approve"));

        req.status = None;
        let (_, message, _) = vendor_email_copy(&req);
        assert!(message.contains("under review"));
    }
}
