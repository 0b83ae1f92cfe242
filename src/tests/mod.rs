mod integration_input_bridge;
mod unit_template_parser;
