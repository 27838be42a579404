use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet,
    MethodDescriptorProto, ServiceDescriptorProto,
    field_descriptor_proto::{Label, Type},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match tonic_prost_build::compile_protos("proto/registry.proto") {
        Ok(()) => Ok(()),
        // protoc 不可用时，退回到与 proto/registry.proto 等价的内置描述符
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("cargo:rerun-if-changed=proto/registry.proto");
            tonic_prost_build::compile_fds(registry_descriptor_set())?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn scalar_field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn message_field(name: &str, number: i32, type_name: &str, label: Label) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(label as i32),
        r#type: Some(Type::Message as i32),
        type_name: Some(type_name.to_string()),
        json_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        ..Default::default()
    }
}

fn registry_descriptor_set() -> FileDescriptorSet {
    FileDescriptorSet {
        file: vec![FileDescriptorProto {
            name: Some("registry.proto".to_string()),
            package: Some("registry".to_string()),
            syntax: Some("proto3".to_string()),
            message_type: vec![
                message(
                    "User",
                    vec![
                        scalar_field("id", 1, Type::String),
                        scalar_field("name", 2, Type::String),
                        scalar_field("email", 3, Type::String),
                    ],
                ),
                message(
                    "CreateUserRequest",
                    vec![
                        scalar_field("name", 1, Type::String),
                        scalar_field("email", 2, Type::String),
                    ],
                ),
                message(
                    "CreateUserResponse",
                    vec![message_field("user", 1, ".registry.User", Label::Optional)],
                ),
                message("GetUserRequest", vec![scalar_field("id", 1, Type::String)]),
                message(
                    "GetUserResponse",
                    vec![message_field("user", 1, ".registry.User", Label::Optional)],
                ),
                message("ListUsersRequest", vec![]),
                message(
                    "ListUsersResponse",
                    vec![message_field("users", 1, ".registry.User", Label::Repeated)],
                ),
                message(
                    "DeleteUserRequest",
                    vec![scalar_field("id", 1, Type::String)],
                ),
                message(
                    "DeleteUserResponse",
                    vec![scalar_field("success", 1, Type::Bool)],
                ),
            ],
            service: vec![ServiceDescriptorProto {
                name: Some("UserService".to_string()),
                method: vec![
                    method(
                        "CreateUser",
                        ".registry.CreateUserRequest",
                        ".registry.CreateUserResponse",
                    ),
                    method(
                        "GetUser",
                        ".registry.GetUserRequest",
                        ".registry.GetUserResponse",
                    ),
                    method(
                        "ListUsers",
                        ".registry.ListUsersRequest",
                        ".registry.ListUsersResponse",
                    ),
                    method(
                        "DeleteUser",
                        ".registry.DeleteUserRequest",
                        ".registry.DeleteUserResponse",
                    ),
                ],
                ..Default::default()
            }],
            ..Default::default()
        }],
    }
}
