// Read-only view of the tables maintained by the case, document and client services.

diesel::table! {
    legal_case (id) {
        id -> Uuid,
        client_id -> Nullable<Uuid>,
        assigned_partner_id -> Nullable<Uuid>,
        assigned_to -> Nullable<Uuid>,
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    case_associate (case_id, user_id) {
        case_id -> Uuid,
        user_id -> Uuid,
    }
}

diesel::table! {
    document (id) {
        id -> Uuid,
        case_id -> Nullable<Uuid>,
        uploaded_by -> Nullable<Uuid>,
        is_confidential -> Bool,
    }
}

diesel::joinable!(case_associate -> legal_case (case_id));
diesel::joinable!(document -> legal_case (case_id));

diesel::allow_tables_to_appear_in_same_query!(legal_case, case_associate, document);
