///
/// Reason why user is not allowed to see hotels
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("user has no enrollment")]
    NoEnrollment,

    #[error("enrollment has no ticket")]
    NoTicket,

    #[error("ticket type does not include hotel")]
    TicketWithoutHotel,

    #[error("ticket is not paid")]
    PaymentPending,
}
