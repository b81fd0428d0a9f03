use utoipa::OpenApi;

use super::admin::{listings as admin_listings, recent_activities, review_verification, stats, users as admin_users};
use super::favorites::{create as create_favorite, delete_favorite, list as list_favorites};
use super::health;
use super::inquiries::{create as create_inquiry, list as list_inquiries, mark_read, reply};
use super::listings::{
    create as create_listing, delete as delete_listing, delete_image, get as get_listing,
    increment_views, map, promote, search, set_primary_image, stats as listing_stats,
    toggle_publish, update as update_listing, upload_images,
};
use super::messages::{create as create_message, list as list_messages};
use super::password_reset::{confirm, request, validate};
use super::payments::{contact_access, initiate, list as list_payments, verify, verify_account};
use super::tokens::{obtain, refresh};
use super::users::{me, register, set_password};
use super::verification::{list as list_verification, submit};

use model::favorite::FavoriteResponse;
use model::inquiry::{InquiryResponse, MessageWithSender};
use model::listing::{ListingImageView, ListingResponse, ListingStatus, MapListing};
use model::payment::{Payment, PaymentStatus, PaymentType, PaymentWithContext};
use model::response::{GenericErrorResponse, MessageResponse};
use model::user::{UserProfile, UserRole};
use model::verification::{DocumentStatus, VerificationDocumentView};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_handler,
        register::register_handler,
        me::get_me_handler,
        me::update_me_handler,
        set_password::set_password_handler,
        obtain::obtain_token_handler,
        refresh::refresh_token_handler,
        request::request_reset_handler,
        confirm::confirm_reset_handler,
        validate::validate_reset_handler,
        search::search_listings_handler,
        get_listing::get_listing_handler,
        create_listing::create_listing_handler,
        update_listing::update_listing_handler,
        delete_listing::delete_listing_handler,
        map::map_listings_handler,
        listing_stats::listing_stats_handler,
        increment_views::increment_views_handler,
        toggle_publish::toggle_publish_handler,
        promote::promote_listing_handler,
        upload_images::upload_images_handler,
        delete_image::delete_image_handler,
        set_primary_image::set_primary_image_handler,
        list_payments::list_payments_handler,
        initiate::initiate_payment_handler,
        verify_account::verify_account_handler,
        contact_access::contact_access_handler,
        verify::verify_payment_handler,
        submit::submit_document_handler,
        list_verification::list_documents_handler,
        list_favorites::list_favorites_handler,
        create_favorite::create_favorite_handler,
        delete_favorite::delete_favorite_handler,
        list_inquiries::list_inquiries_handler,
        create_inquiry::create_inquiry_handler,
        reply::reply_handler,
        mark_read::mark_read_handler,
        list_messages::list_messages_handler,
        create_message::create_message_handler,
        stats::admin_stats_handler,
        recent_activities::recent_activities_handler,
        admin_users::all_users_handler,
        admin_users::create_user_handler,
        admin_users::toggle_active_handler,
        admin_users::verify_user_handler,
        admin_listings::all_listings_handler,
        review_verification::review_verification_handler,
    ),
    components(schemas(
        UserRole,
        UserProfile,
        ListingStatus,
        ListingResponse,
        ListingImageView,
        MapListing,
        PaymentType,
        PaymentStatus,
        Payment,
        PaymentWithContext,
        DocumentStatus,
        VerificationDocumentView,
        FavoriteResponse,
        InquiryResponse,
        MessageWithSender,
        MessageResponse,
        GenericErrorResponse,
        register::RegisterRequest,
        me::UpdateMeRequest,
        set_password::SetPasswordRequest,
        obtain::ObtainTokenRequest,
        obtain::TokenPairResponse,
        refresh::RefreshTokenRequest,
        refresh::AccessTokenResponse,
        request::RequestResetRequest,
        confirm::ConfirmResetRequest,
        validate::ValidateResetResponse,
        create_listing::CreateListingRequest,
        update_listing::UpdateListingRequest,
        listing_stats::ListingStatsResponse,
        listing_stats::InquiryStats,
        increment_views::ViewsResponse,
        toggle_publish::TogglePublishResponse,
        promote::PromoteListingRequest,
        delete_image::DeleteImageRequest,
        set_primary_image::SetPrimaryImageRequest,
        initiate::InitiatePaymentRequest,
        initiate::InitiatePaymentResponse,
        verify_account::VerifyAccountRequest,
        contact_access::ContactAccessRequest,
        verify::VerifyPaymentRequest,
        verify::VerifyPaymentResponse,
        create_favorite::CreateFavoriteRequest,
        create_inquiry::CreateInquiryRequest,
        reply::ReplyRequest,
        create_message::CreateMessageRequest,
        stats::AdminStatsResponse,
        stats::UserStats,
        stats::ListingStats,
        stats::RevenueStats,
        stats::VerificationStats,
        recent_activities::RecentActivitiesResponse,
        recent_activities::RecentUser,
        recent_activities::RecentListingEntry,
        recent_activities::RecentPayment,
        admin_users::AdminCreateUserRequest,
        admin_users::ToggleActiveResponse,
        review_verification::ReviewVerificationRequest,
    ))
)]
pub struct ApiDoc;
